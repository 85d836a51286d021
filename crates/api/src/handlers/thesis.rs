//! Handlers for staff administration of current theses: listing by
//! area/worktype, status transitions, title edits, and curator messages.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use praktika_core::error::CoreError;
use praktika_core::notify;
use praktika_core::thesis::ThesisStatus;
use praktika_core::types::DbId;
use praktika_db::models::thesis::{CurrentThesis, UpdateTitle};
use praktika_db::repositories::{NotificationRepo, ThesisRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load a thesis, rejecting missing and soft-deleted rows with 404.
pub(crate) async fn ensure_thesis_exists(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<CurrentThesis> {
    let thesis = ThesisRepo::find_by_id(pool, id)
        .await?
        .filter(|t| !t.deleted)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Thesis",
            id,
        }))?;
    Ok(thesis)
}

/// Best-effort notification to a thesis author: one mail-outbox row and one
/// in-app row. Delivery failure is logged and never fails the caller.
pub(crate) async fn notify_author(
    pool: &sqlx::PgPool,
    recipient_id: DbId,
    subject: &str,
    body: &str,
) {
    if let Err(e) = NotificationRepo::create_mail(pool, recipient_id, subject, body).await {
        tracing::warn!(recipient_id, error = %e, "Failed to queue mail notification");
    }
    if let Err(e) = NotificationRepo::create(pool, recipient_id, body).await {
        tracing::warn!(recipient_id, error = %e, "Failed to create in-app notification");
    }
}

/// The staff member's display name, for notification bodies.
async fn staff_name(pool: &sqlx::PgPool, user_id: DbId) -> String {
    match UserRepo::find_by_id(pool, user_id).await {
        Ok(Some(user)) => user.full_name,
        _ => "practice curator".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/theses`.
#[derive(Debug, Deserialize)]
pub struct ListThesesQuery {
    pub area_id: DbId,
    pub worktype_id: DbId,
    /// `in_progress` (default) or `finished`.
    pub status: Option<ThesisStatus>,
}

/// GET /api/v1/admin/theses
///
/// List titled, non-deleted theses of an area/worktype selection.
pub async fn list_theses(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<ListThesesQuery>,
) -> AppResult<impl IntoResponse> {
    let status = params.status.unwrap_or(ThesisStatus::InProgress);
    let theses =
        ThesisRepo::list_for_selection(&state.pool, params.area_id, params.worktype_id, status)
            .await?;
    Ok(Json(DataResponse { data: theses }))
}

/// GET /api/v1/admin/theses/{id}
///
/// Thesis detail.
pub async fn get_thesis(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let thesis = ensure_thesis_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: thesis }))
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/theses/{id}/finish
pub async fn finish_thesis(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_status(&state, id, ThesisStatus::Finished, staff.user_id).await
}

/// POST /api/v1/admin/theses/{id}/restore
pub async fn restore_thesis(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_status(&state, id, ThesisStatus::InProgress, staff.user_id).await
}

async fn set_status(
    state: &AppState,
    id: DbId,
    status: ThesisStatus,
    staff_id: DbId,
) -> AppResult<Json<DataResponse<CurrentThesis>>> {
    ensure_thesis_exists(&state.pool, id).await?;
    ThesisRepo::set_status(&state.pool, id, status).await?;

    tracing::info!(
        thesis_id = id,
        status = status.label(),
        user_id = staff_id,
        "Thesis status changed",
    );

    let updated = ensure_thesis_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: updated }))
}

/// Query parameters for `POST /admin/theses/finish-all`.
#[derive(Debug, Deserialize)]
pub struct FinishAllQuery {
    pub area_id: DbId,
    pub worktype_id: DbId,
}

/// POST /api/v1/admin/theses/finish-all
///
/// Finish every in-progress, titled thesis of the selection. Returns the
/// number of theses finished.
pub async fn finish_all(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<FinishAllQuery>,
) -> AppResult<impl IntoResponse> {
    let finished = ThesisRepo::finish_all(&state.pool, params.area_id, params.worktype_id).await?;

    tracing::info!(
        area_id = params.area_id,
        worktype_id = params.worktype_id,
        finished,
        user_id = staff.user_id,
        "Finished all in-progress theses of selection",
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({ "finished": finished }),
    }))
}

// ---------------------------------------------------------------------------
// Title edit
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/theses/{id}/title
///
/// Rename a thesis and notify the author of the change.
pub async fn update_title(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTitle>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }

    let thesis = ensure_thesis_exists(&state.pool, id).await?;
    let old_title = thesis.title.clone().unwrap_or_default();

    ThesisRepo::set_title(&state.pool, id, &input.title).await?;

    tracing::info!(thesis_id = id, user_id = staff.user_id, "Thesis title changed");

    let body = notify::title_changed(&old_title, &input.title);
    notify_author(
        &state.pool,
        thesis.author_id,
        notify::CURATOR_MESSAGE_SUBJECT,
        &body,
    )
    .await;

    let updated = ensure_thesis_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Curator message
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/theses/{id}/notify`.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub content: String,
}

/// POST /api/v1/admin/theses/{id}/notify
///
/// Send a free-text message from the curator to the thesis author.
pub async fn notify_thesis_author(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NotifyRequest>,
) -> AppResult<impl IntoResponse> {
    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot send an empty notification".into(),
        )));
    }

    let thesis = ensure_thesis_exists(&state.pool, id).await?;
    let title = thesis.title.clone().unwrap_or_default();
    let curator = staff_name(&state.pool, staff.user_id).await;

    let body = notify::curator_message(&curator, &title, &input.content);
    notify_author(
        &state.pool,
        thesis.author_id,
        notify::CURATOR_MESSAGE_SUBJECT,
        &body,
    )
    .await;

    tracing::info!(
        thesis_id = id,
        recipient_id = thesis.author_id,
        user_id = staff.user_id,
        "Curator notification sent",
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({ "sent": true }),
    }))
}
