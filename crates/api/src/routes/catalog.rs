//! Route definitions for the study catalog resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET    /areas        -> list_areas
/// GET    /worktypes    -> list_worktypes
/// GET    /courses      -> list_courses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/areas", get(catalog::list_areas))
        .route("/worktypes", get(catalog::list_worktypes))
        .route("/courses", get(catalog::list_courses))
}
