//! CSV ingestion and preview
//!
//! Turns an uploaded payroll CSV into a bounded preview: column list,
//! total data-row count, and the first few rows. The whole file is
//! buffered in memory before parsing; the HTTP layer bounds body size.
//!
//! Policy decisions (documented because the wire shape depends on them):
//! - Strict row widths: a data row whose field count differs from the
//!   header fails the whole request. The preview exists to catch exactly
//!   this kind of payroll-file error before full processing.
//! - No type coercion: every cell comes back as a JSON string, exactly as
//!   parsed. Callers coerce.
//! - Empty input is a processing error: a file without even a header line
//!   fails rather than producing a zero-column preview. A header-only file
//!   is fine (zero data rows, full column list).

use payflow_common::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Maximum number of data rows included in a preview
pub const PREVIEW_ROWS: usize = 5;

/// Bounded view over a parsed upload
///
/// `columns` preserves header order, duplicates included. `preview` rows
/// are JSON objects keyed by column name; with duplicate headers the later
/// column wins within a row object (objects cannot hold two equal keys),
/// while `columns` still lists every occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewResult {
    /// Count of data rows, header excluded
    pub total_rows: usize,
    /// Header names in file order
    pub columns: Vec<String>,
    /// First `min(PREVIEW_ROWS, total_rows)` rows in file order
    pub preview: Vec<Map<String, Value>>,
}

/// Parse an uploaded CSV and compute its preview
///
/// Pure function of its inputs: no state is retained between calls and no
/// partial result is ever returned on failure.
///
/// # Errors
///
/// - [`Error::InvalidFileType`] when `filename` does not end in `.csv`
///   (case-sensitive); content is not inspected in this case
/// - [`Error::MalformedEncoding`] when `content` is not valid UTF-8
/// - [`Error::EmptyFile`] when the input holds no header line at all
/// - [`Error::MalformedRow`] when a data row's field count differs from
///   the header's
/// - [`Error::Parse`] for any other parser-level failure
pub fn ingest(filename: &str, content: &[u8]) -> Result<PreviewResult> {
    if !filename.ends_with(".csv") {
        return Err(Error::InvalidFileType);
    }

    let text = std::str::from_utf8(content)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(false)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if columns.is_empty() {
        return Err(Error::EmptyFile);
    }

    let mut total_rows = 0usize;
    let mut preview = Vec::with_capacity(PREVIEW_ROWS);

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                if let csv::ErrorKind::UnequalLengths {
                    expected_len, len, ..
                } = e.kind()
                {
                    return Err(Error::MalformedRow {
                        record: total_rows as u64 + 1,
                        expected: *expected_len as usize,
                        found: *len as usize,
                    });
                }
                return Err(Error::Parse(e));
            }
        };

        total_rows += 1;
        if preview.len() < PREVIEW_ROWS {
            let mut row = Map::new();
            for (column, cell) in columns.iter().zip(record.iter()) {
                row.insert(column.clone(), Value::String(cell.to_string()));
            }
            preview.push(row);
        }
    }

    Ok(PreviewResult {
        total_rows,
        columns,
        preview,
    })
}
