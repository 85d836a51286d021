//! Spreadsheet/cloud export collaborator boundary.
//!
//! Rendering the practice table and uploading it to external disk storage
//! are out of scope for this service; they sit behind [`TableExporter`].
//! The server validates the request, builds the rows, and hands both to the
//! collaborator. [`LoggingExporter`] is the default implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use praktika_core::error::CoreError;

/// Column keys a practice table may contain.
pub const TABLE_COLUMNS: &[&str] = &[
    "name",
    "supervisor",
    "theme",
    "text",
    "supervisor_review",
    "reviewer_review",
    "code",
    "presentation",
];

/// One column of the requested table: a known key plus the display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
}

/// A validated export request.
#[derive(Debug, Clone, Deserialize)]
pub struct TableExportRequest {
    pub table_name: String,
    pub sheet_name: String,
    pub columns: Vec<ColumnSpec>,
}

/// One row of the practice table, keyed by the thesis.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeRow {
    pub author_name: String,
    pub supervisor_name: Option<String>,
    pub title: Option<String>,
    pub text_uri: Option<String>,
    pub supervisor_review_uri: Option<String>,
    pub reviewer_review_uri: Option<String>,
    pub code_link: Option<String>,
    pub presentation_uri: Option<String>,
}

/// Failure from the export collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The collaborator rejected or failed the upload.
    #[error("Export upload failed: {0}")]
    Upload(String),
}

/// Validate an export request before handing it to the collaborator.
///
/// The table name must be non-empty with an `.xlsx` extension, and every
/// requested column must use a known key and a non-empty label. Each failure
/// carries its own message so the caller can correct the input and retry.
pub fn validate_export_request(request: &TableExportRequest) -> Result<(), CoreError> {
    if request.table_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Enter a file name for the export".into(),
        ));
    }
    if !request.table_name.ends_with(".xlsx") {
        return Err(CoreError::Validation(
            "The table file must have an .xlsx extension".into(),
        ));
    }
    for column in &request.columns {
        if !TABLE_COLUMNS.contains(&column.key.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown table column '{}'",
                column.key
            )));
        }
        if column.label.trim().is_empty() {
            return Err(CoreError::Validation(
                "Table column labels must not be empty".into(),
            ));
        }
    }
    Ok(())
}

/// Collaborator that renders the practice table and uploads it to external
/// storage.
#[async_trait]
pub trait TableExporter: Send + Sync {
    async fn upload(
        &self,
        request: &TableExportRequest,
        rows: &[PracticeRow],
    ) -> Result<(), ExportError>;
}

/// Default exporter: logs the request and drops the data.
pub struct LoggingExporter;

#[async_trait]
impl TableExporter for LoggingExporter {
    async fn upload(
        &self,
        request: &TableExportRequest,
        rows: &[PracticeRow],
    ) -> Result<(), ExportError> {
        tracing::info!(
            table = %request.table_name,
            sheet = %request.sheet_name,
            columns = request.columns.len(),
            rows = rows.len(),
            "Practice table export requested (logging exporter)",
        );
        Ok(())
    }
}
