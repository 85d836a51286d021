//! Listing and download of a thesis's working-storage artifacts.

use axum::body::Body;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use praktika_core::error::CoreError;
use praktika_core::thesis::FileKind;
use praktika_core::types::DbId;
use serde::Serialize;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::handlers::thesis::ensure_thesis_exists;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// One artifact slot of a thesis in the materials listing.
#[derive(Debug, Serialize)]
pub struct MaterialEntry {
    pub kind: &'static str,
    pub required: bool,
    pub filename: Option<String>,
}

/// GET /api/v1/admin/theses/{id}/materials
///
/// The four artifact slots of a thesis with the stored filename of each,
/// present or not.
pub async fn list_materials(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    UrlPath(id): UrlPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let thesis = ensure_thesis_exists(&state.pool, id).await?;

    let entries: Vec<MaterialEntry> = FileKind::ALL
        .into_iter()
        .map(|kind| MaterialEntry {
            kind: kind.tag(),
            required: kind.is_required(),
            filename: stored_name(&thesis, kind),
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/admin/theses/{id}/materials/{kind}
///
/// Download a working-storage artifact. 404 if the thesis carries no file of
/// that kind or the file is missing on disk.
pub async fn download_material(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    UrlPath((id, kind)): UrlPath<(DbId, String)>,
) -> AppResult<Response> {
    let kind = FileKind::from_tag(&kind).map_err(AppError::Core)?;
    let thesis = ensure_thesis_exists(&state.pool, id).await?;

    let filename = stored_name(&thesis, kind).ok_or(AppError::Core(CoreError::NotFound {
        entity: "Thesis material",
        id,
    }))?;
    let path = state.storage.working_path(kind, &filename);

    if !path.exists() {
        tracing::warn!(
            thesis_id = id,
            kind = kind.tag(),
            path = %path.display(),
            "Stored artifact missing on disk",
        );
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Thesis material",
            id,
        }));
    }

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| AppError::Core(CoreError::Storage(format!("{}: {e}", path.display()))))?;
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::Core(CoreError::Storage(format!("{}: {e}", path.display()))))?;
    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for_extension(&filename))
        .header(header::CONTENT_LENGTH, metadata.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

fn stored_name(thesis: &praktika_db::models::thesis::CurrentThesis, kind: FileKind) -> Option<String> {
    match kind {
        FileKind::Text => thesis.text_uri.clone(),
        FileKind::Presentation => thesis.presentation_uri.clone(),
        FileKind::SupervisorReview => thesis.supervisor_review_uri.clone(),
        FileKind::ReviewerReview => thesis.reviewer_review_uri.clone(),
    }
}

/// Guess a Content-Type from a file extension.
fn content_type_for_extension(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "odp" => "application/vnd.oasis.opendocument.presentation",
        "txt" => "text/plain; charset=utf-8",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_cover_office_formats() {
        assert_eq!(content_type_for_extension("paper.pdf"), "application/pdf");
        assert_eq!(
            content_type_for_extension("slides.PPTX"),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        );
        assert_eq!(
            content_type_for_extension("mystery"),
            "application/octet-stream"
        );
    }
}
