//! HTTP API handlers for the PayFlow backend

pub mod assistant;
pub mod employees;
pub mod health;
pub mod system;
pub mod upload;

pub use assistant::{ai_analyze, ai_chat, ai_recommend};
pub use employees::{employee_me, list_employees};
pub use health::health_routes;
pub use system::system_ip;
pub use upload::upload_csv;
