//! Route definitions for the staff administration surface: thesis listing,
//! status management, materials, archival, and the practice table export.
//!
//! Every handler behind these routes requires the staff role.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{archive, export, materials, thesis};
use crate::state::AppState;

/// Upper bound for the archive multipart body. Thesis texts and
/// presentations routinely exceed the 2MB axum default.
const ARCHIVE_BODY_LIMIT: usize = 100 * 1024 * 1024;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /theses                          -> list_theses (?area_id&worktype_id&status)
/// POST   /theses/finish-all               -> finish_all (?area_id&worktype_id)
/// GET    /theses/{id}                     -> get_thesis
/// POST   /theses/{id}/finish              -> finish_thesis
/// POST   /theses/{id}/restore             -> restore_thesis
/// PUT    /theses/{id}/title               -> update_title
/// POST   /theses/{id}/notify              -> notify_thesis_author
/// GET    /theses/{id}/materials           -> list_materials
/// GET    /theses/{id}/materials/{kind}    -> download_material
/// POST   /theses/{id}/archive             -> archive_thesis
///
/// POST   /export                          -> export_table (?area_id&worktype_id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/theses", get(thesis::list_theses))
        .route("/theses/finish-all", post(thesis::finish_all))
        .route("/theses/{id}", get(thesis::get_thesis))
        .route("/theses/{id}/finish", post(thesis::finish_thesis))
        .route("/theses/{id}/restore", post(thesis::restore_thesis))
        .route("/theses/{id}/title", put(thesis::update_title))
        .route("/theses/{id}/notify", post(thesis::notify_thesis_author))
        .route("/theses/{id}/materials", get(materials::list_materials))
        .route(
            "/theses/{id}/materials/{kind}",
            get(materials::download_material),
        )
        .route(
            "/theses/{id}/archive",
            post(archive::archive_thesis).layer(DefaultBodyLimit::max(ARCHIVE_BODY_LIMIT)),
        )
        .route("/export", post(export::export_table))
}
