//! Archived thesis entity models and DTOs.

use praktika_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `archived_theses` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArchivedThesis {
    pub id: DbId,
    pub worktype_id: DbId,
    pub course_id: DbId,
    pub area_id: DbId,
    pub title: String,
    pub author_name: String,
    pub author_id: Option<DbId>,
    pub supervisor_id: Option<DbId>,
    pub publish_year: Option<i32>,
    pub text_uri: String,
    pub presentation_uri: String,
    pub supervisor_review_uri: String,
    pub reviewer_review_uri: Option<String>,
    pub source_uri: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an archive record. Built by the archival workflow after
/// validation and file materialization succeed.
#[derive(Debug, Clone)]
pub struct CreateArchivedThesis {
    pub worktype_id: DbId,
    pub course_id: DbId,
    pub area_id: DbId,
    pub title: String,
    pub author_name: String,
    pub author_id: Option<DbId>,
    pub supervisor_id: Option<DbId>,
    pub publish_year: Option<i32>,
    pub text_uri: String,
    pub presentation_uri: String,
    pub supervisor_review_uri: String,
    pub reviewer_review_uri: Option<String>,
    pub source_uri: Option<String>,
}
