//! The thesis archival workflow.
//!
//! `POST /admin/theses/{id}/archive` takes a multipart form (course,
//! publish year, code link, and up to four artifact files), validates the
//! preconditions, materializes the archive copies on disk, and commits the
//! immutable archive record in a single transaction. Files written before a
//! failure are removed again so a failed attempt leaves no debris.

use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use praktika_core::archive::{
    build_archive_plan, resolve_source_link, validate_archive_input, ArchivePlan,
    ArchiveSubmission, FileSource, StoredArtifacts, UploadedFile,
};
use praktika_core::error::CoreError;
use praktika_core::notify;
use praktika_core::thesis::FileKind;
use praktika_core::types::DbId;
use praktika_db::models::archive::CreateArchivedThesis;
use praktika_db::models::thesis::CurrentThesis;
use praktika_db::repositories::{CatalogRepo, ThesisRepo, UserRepo};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::handlers::thesis::{ensure_thesis_exists, notify_author};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/theses/{id}/archive
///
/// Move a finished work into the archive. Responds 201 with the archive
/// record, 400 on a failed precondition, 409 if the work is already
/// archived.
pub async fn archive_thesis(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    UrlPath(id): UrlPath<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let submission = parse_submission(multipart).await?;

    let thesis = ensure_thesis_exists(&state.pool, id).await?;
    if thesis.archived {
        return Err(AppError::Core(CoreError::Conflict(
            "Thesis is already archived".into(),
        )));
    }
    let title = thesis
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "A work without a title cannot be archived".into(),
            ))
        })?;

    let stored = stored_artifacts(&thesis);
    validate_archive_input(&stored, &submission)?;

    let course = CatalogRepo::find_course(&state.pool, submission.course_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown course id {}",
                submission.course_id
            )))
        })?;
    let worktype = CatalogRepo::find_worktype(&state.pool, thesis.worktype_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Worktype",
            id: thesis.worktype_id,
        }))?;
    let area = CatalogRepo::find_area(&state.pool, thesis.area_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Area of study",
            id: thesis.area_id,
        }))?;

    // The archive row snapshots the author's name; it must be the real name
    // at archival time, so a lookup failure fails the whole operation.
    let author_name = UserRepo::find_by_id(&state.pool, thesis.author_id)
        .await?
        .map(|author| author.full_name)
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Author {} of thesis {id} does not exist",
                thesis.author_id
            ))
        })?;

    let source_uri = resolve_source_link(
        thesis.code_link.as_deref(),
        submission.code_link.as_deref(),
    );
    let publish_year = submission.publish_year;
    let course_id = submission.course_id;

    let plan = build_archive_plan(
        &state.storage,
        &worktype.tag,
        &area.name,
        &stored,
        submission,
        |dest| dest.exists(),
    );

    let written = materialize(&state, &plan).await?;

    let record = CreateArchivedThesis {
        worktype_id: thesis.worktype_id,
        course_id,
        area_id: thesis.area_id,
        title: title.clone(),
        author_name,
        author_id: Some(thesis.author_id),
        supervisor_id: thesis.supervisor_id,
        publish_year,
        // Validation guarantees every required kind is in the plan.
        text_uri: required_name(&plan, FileKind::Text)?,
        presentation_uri: required_name(&plan, FileKind::Presentation)?,
        supervisor_review_uri: required_name(&plan, FileKind::SupervisorReview)?,
        reviewer_review_uri: plan
            .archive_name(FileKind::ReviewerReview)
            .map(str::to_string),
        source_uri,
    };

    let archived = match ThesisRepo::archive(&state.pool, id, &record).await {
        Ok(Some(archived)) => archived,
        Ok(None) => {
            // A concurrent request archived the work between the guard above
            // and the transaction. Remove our copies and report the conflict.
            cleanup(&written).await;
            return Err(AppError::Core(CoreError::Conflict(
                "Thesis is already archived".into(),
            )));
        }
        Err(e) => {
            cleanup(&written).await;
            return Err(e.into());
        }
    };

    let curator = match UserRepo::find_by_id(&state.pool, staff.user_id).await {
        Ok(Some(user)) => user.full_name,
        _ => "practice curator".to_string(),
    };
    let body = notify::work_archived(&curator, &title);
    notify_author(&state.pool, thesis.author_id, notify::ARCHIVED_SUBJECT, &body).await;

    tracing::info!(
        thesis_id = id,
        archive_id = archived.id,
        user_id = staff.user_id,
        "Thesis archived",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: archived })))
}

/// Names of the working-storage artifacts recorded on the thesis row.
fn stored_artifacts(thesis: &CurrentThesis) -> StoredArtifacts<'_> {
    StoredArtifacts {
        text: thesis.text_uri.as_deref(),
        presentation: thesis.presentation_uri.as_deref(),
        supervisor_review: thesis.supervisor_review_uri.as_deref(),
        reviewer_review: thesis.reviewer_review_uri.as_deref(),
    }
}

fn required_name(plan: &ArchivePlan, kind: FileKind) -> AppResult<String> {
    plan.archive_name(kind).map(str::to_string).ok_or_else(|| {
        AppError::InternalError(format!(
            "Archive plan is missing the required {} file",
            kind.label()
        ))
    })
}

/// Parse the multipart form into an [`ArchiveSubmission`].
async fn parse_submission(mut multipart: Multipart) -> AppResult<ArchiveSubmission> {
    let mut submission = ArchiveSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "course" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed field 'course': {e}")))?;
                submission.course_id = value.trim().parse().map_err(|_| {
                    AppError::BadRequest(format!("Field 'course' must be a number, got '{value}'"))
                })?;
            }
            "publish_year" => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Malformed field 'publish_year': {e}"))
                })?;
                if !value.trim().is_empty() {
                    let year = value.trim().parse().map_err(|_| {
                        AppError::BadRequest(format!(
                            "Field 'publish_year' must be a year, got '{value}'"
                        ))
                    })?;
                    submission.publish_year = Some(year);
                }
            }
            "code_link" => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Malformed field 'code_link': {e}"))
                })?;
                if !value.trim().is_empty() {
                    submission.code_link = Some(value.trim().to_string());
                }
            }
            tag => {
                let Ok(kind) = FileKind::from_tag(tag) else {
                    // Unknown parts are ignored, matching lenient form handling.
                    continue;
                };
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read uploaded file '{tag}': {e}"))
                })?;
                let upload = UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                };
                match kind {
                    FileKind::Text => submission.text = Some(upload),
                    FileKind::Presentation => submission.presentation = Some(upload),
                    FileKind::SupervisorReview => submission.supervisor_review = Some(upload),
                    FileKind::ReviewerReview => submission.reviewer_review = Some(upload),
                }
            }
        }
    }

    Ok(submission)
}

/// Write every planned file into archive storage.
///
/// Returns the paths written so the caller can undo them if the database
/// commit fails afterwards. On an I/O error the files written so far are
/// removed before the error is returned.
async fn materialize(state: &AppState, plan: &ArchivePlan) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(plan.files.len());

    for file in &plan.files {
        let dir = state.storage.archive_dir(file.kind);
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            cleanup(&written).await;
            return Err(storage_error(&dir, e));
        }

        let result = match &file.source {
            FileSource::CopyFrom(src) => tokio::fs::copy(src, &file.dest).await.map(|_| ()),
            FileSource::SaveUpload(bytes) => tokio::fs::write(&file.dest, bytes).await,
        };
        if let Err(e) = result {
            cleanup(&written).await;
            return Err(storage_error(&file.dest, e));
        }
        written.push(file.dest.clone());
    }

    Ok(written)
}

/// Best-effort removal of archive files written by a failed attempt.
async fn cleanup(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove archive file during rollback");
        }
    }
}

fn storage_error(path: &std::path::Path, e: std::io::Error) -> AppError {
    AppError::Core(CoreError::Storage(format!(
        "{}: {e}",
        path.display()
    )))
}
