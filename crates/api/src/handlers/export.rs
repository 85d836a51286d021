//! Practice table export: build rows for a selection and hand them to the
//! configured [`TableExporter`](crate::export::TableExporter).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use praktika_core::thesis::ThesisStatus;
use praktika_db::repositories::{ThesisRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::export::{validate_export_request, PracticeRow, TableExportRequest};
use crate::handlers::thesis::ListThesesQuery;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/export
///
/// Validate the requested table layout, build one row per thesis of the
/// selection, and upload through the export collaborator. Responds with the
/// number of rows exported.
pub async fn export_table(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<ListThesesQuery>,
    Json(request): Json<TableExportRequest>,
) -> AppResult<impl IntoResponse> {
    validate_export_request(&request)?;

    let status = params.status.unwrap_or(ThesisStatus::InProgress);
    let theses =
        ThesisRepo::list_for_selection(&state.pool, params.area_id, params.worktype_id, status)
            .await?;

    let mut rows = Vec::with_capacity(theses.len());
    for thesis in &theses {
        let author_name = match UserRepo::find_by_id(&state.pool, thesis.author_id).await? {
            Some(user) => user.full_name,
            None => String::new(),
        };
        let supervisor_name = match thesis.supervisor_id {
            Some(id) => UserRepo::find_by_id(&state.pool, id).await?.map(|u| u.full_name),
            None => None,
        };
        rows.push(PracticeRow {
            author_name,
            supervisor_name,
            title: thesis.title.clone(),
            text_uri: thesis.text_uri.clone(),
            supervisor_review_uri: thesis.supervisor_review_uri.clone(),
            reviewer_review_uri: thesis.reviewer_review_uri.clone(),
            code_link: thesis.code_link.clone(),
            presentation_uri: thesis.presentation_uri.clone(),
        });
    }

    state
        .exporter
        .upload(&request, &rows)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(
        table = %request.table_name,
        rows = rows.len(),
        area_id = params.area_id,
        worktype_id = params.worktype_id,
        user_id = staff.user_id,
        "Practice table exported",
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({ "exported": rows.len() }),
    }))
}
