pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
///
/// /catalog/areas                           selectable areas of study
/// /catalog/worktypes                       selectable work types
/// /catalog/courses                         courses
///
/// /admin/theses                            list theses of a selection (staff)
/// /admin/theses/finish-all                 finish every thesis of a selection
/// /admin/theses/{id}                       thesis detail
/// /admin/theses/{id}/finish                mark finished
/// /admin/theses/{id}/restore               mark in progress again
/// /admin/theses/{id}/title                 rename (PUT)
/// /admin/theses/{id}/notify                message the author
/// /admin/theses/{id}/materials             artifact listing
/// /admin/theses/{id}/materials/{kind}      artifact download
/// /admin/theses/{id}/archive               move to the archive (POST, multipart)
/// /admin/export                            practice table export
///
/// /notifications                           caller's notifications
/// /notifications/unread-count              unread counter
/// /notifications/{id}/read                 mark one as read
/// ```
///
/// The `/health` route is mounted at the application root by
/// [`crate::router::build_app_router`], outside this tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/catalog", catalog::router())
        .nest("/admin", admin::router())
        .nest("/notifications", notification::router())
}
