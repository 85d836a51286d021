//! Current thesis entity models and DTOs.

use praktika_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `current_theses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurrentThesis {
    pub id: DbId,
    pub title: Option<String>,
    pub status: i32,
    pub archived: bool,
    pub author_id: DbId,
    pub supervisor_id: Option<DbId>,
    pub area_id: DbId,
    pub worktype_id: DbId,
    pub text_uri: Option<String>,
    pub presentation_uri: Option<String>,
    pub supervisor_review_uri: Option<String>,
    pub reviewer_review_uri: Option<String>,
    pub code_link: Option<String>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a current thesis (student submission / test fixtures).
#[derive(Debug, Clone, Default)]
pub struct CreateCurrentThesis {
    pub title: Option<String>,
    pub author_id: DbId,
    pub supervisor_id: Option<DbId>,
    pub area_id: DbId,
    pub worktype_id: DbId,
    pub text_uri: Option<String>,
    pub presentation_uri: Option<String>,
    pub supervisor_review_uri: Option<String>,
    pub reviewer_review_uri: Option<String>,
    pub code_link: Option<String>,
}

/// DTO for a staff title edit.
#[derive(Debug, Deserialize)]
pub struct UpdateTitle {
    pub title: String,
}
