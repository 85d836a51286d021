//! Repository for the study catalog tables (areas, work types, courses).

use praktika_core::types::DbId;
use sqlx::PgPool;

use crate::models::catalog::{AreaOfStudy, Course, Worktype};

/// Provides read access to the study catalog.
///
/// Area id 1 and worktype ids 1-2 are internal placeholders and excluded
/// from the selection lists.
pub struct CatalogRepo;

impl CatalogRepo {
    /// List selectable areas of study.
    pub async fn list_areas(pool: &PgPool) -> Result<Vec<AreaOfStudy>, sqlx::Error> {
        sqlx::query_as::<_, AreaOfStudy>(
            "SELECT id, name FROM areas_of_study WHERE id > 1 ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// List selectable work types.
    pub async fn list_worktypes(pool: &PgPool) -> Result<Vec<Worktype>, sqlx::Error> {
        sqlx::query_as::<_, Worktype>("SELECT id, name, tag FROM worktypes WHERE id > 2 ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// List all courses.
    pub async fn list_courses(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find an area by id.
    pub async fn find_area(pool: &PgPool, id: DbId) -> Result<Option<AreaOfStudy>, sqlx::Error> {
        sqlx::query_as::<_, AreaOfStudy>("SELECT id, name FROM areas_of_study WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a work type by id.
    pub async fn find_worktype(pool: &PgPool, id: DbId) -> Result<Option<Worktype>, sqlx::Error> {
        sqlx::query_as::<_, Worktype>("SELECT id, name, tag FROM worktypes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by id.
    pub async fn find_course(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
