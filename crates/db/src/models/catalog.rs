//! Study catalog rows: areas, work types, courses.

use praktika_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `areas_of_study` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AreaOfStudy {
    pub id: DbId,
    pub name: String,
}

/// A row from the `worktypes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Worktype {
    pub id: DbId,
    pub name: String,
    /// Short Latin tag used in archive filenames.
    pub tag: String,
}

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
}
