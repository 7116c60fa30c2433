//! Upload Validation
//!
//! Spreadsheet checks done before a file leaves the browser.

use crate::error::{ApiError, ApiResult};

/// MIME types browsers report for Excel workbooks
pub const SPREADSHEET_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// A file read into memory, ready for a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Accept Excel files by MIME type, or by extension when the browser
/// reports no type at all
pub fn validate_spreadsheet(name: &str, mime: &str) -> ApiResult<()> {
    let mime = mime.trim();
    if SPREADSHEET_MIME_TYPES.contains(&mime) {
        return Ok(());
    }
    if mime.is_empty() {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        if let Some(ext) = extension {
            if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
                return Ok(());
            }
        }
    }
    Err(ApiError::Validation(
        "Please upload an Excel file (.xlsx or .xls)".to_string(),
    ))
}

/// Size in MB with two decimals, e.g. "0.50 MB"
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
