//! Handlers for the study catalog (areas, work types, courses).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use praktika_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/areas
///
/// List selectable areas of study.
pub async fn list_areas(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let areas = CatalogRepo::list_areas(&state.pool).await?;
    Ok(Json(DataResponse { data: areas }))
}

/// GET /api/v1/catalog/worktypes
///
/// List selectable work types.
pub async fn list_worktypes(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let worktypes = CatalogRepo::list_worktypes(&state.pool).await?;
    Ok(Json(DataResponse { data: worktypes }))
}

/// GET /api/v1/catalog/courses
///
/// List courses (bachelor/master) for the archive form.
pub async fn list_courses(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let courses = CatalogRepo::list_courses(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}
