//! # PayFlow Common Library
//!
//! Shared code for the PayFlow backend:
//! - Error taxonomy
//! - Configuration loading
//! - Shared API request/response types

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
