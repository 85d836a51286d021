//! In-app notification endpoints, scoped to the authenticated user.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use praktika_core::error::CoreError;
use praktika_core::types::DbId;
use praktika_db::repositories::NotificationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Default, Deserialize)]
pub struct ListNotificationsQuery {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/notifications
///
/// The caller's notifications, newest first.
pub async fn list_notifications(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListNotificationsQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list_for_recipient(
        &state.pool,
        user.user_id,
        params.unread_only,
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: notifications }))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = NotificationRepo::unread_count(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse {
        data: serde_json::json!({ "unread": count }),
    }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark one of the caller's notifications as read. Idempotent: repeating the
/// call succeeds. 404 if the notification does not exist or belongs to
/// someone else.
pub async fn mark_read(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = NotificationRepo::mark_read(&state.pool, id, user.user_id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(Json(DataResponse {
        data: serde_json::json!({ "read": true }),
    }))
}
