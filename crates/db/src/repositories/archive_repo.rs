//! Read-only repository for the `archived_theses` table.
//!
//! Archive rows are created solely by [`ThesisRepo::archive`] and never
//! mutated afterwards.
//!
//! [`ThesisRepo::archive`]: crate::repositories::ThesisRepo::archive

use praktika_core::types::DbId;
use sqlx::PgPool;

use crate::models::archive::ArchivedThesis;

/// Column list for `archived_theses` queries.
const COLUMNS: &str = "id, worktype_id, course_id, area_id, title, author_name, \
     author_id, supervisor_id, publish_year, text_uri, presentation_uri, \
     supervisor_review_uri, reviewer_review_uri, source_uri, created_at";

/// Provides read access to archived theses.
pub struct ArchiveRepo;

impl ArchiveRepo {
    /// Find an archived thesis by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArchivedThesis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM archived_theses WHERE id = $1");
        sqlx::query_as::<_, ArchivedThesis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List archived theses for an author, newest first.
    pub async fn list_for_author(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<ArchivedThesis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM archived_theses \
             WHERE author_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArchivedThesis>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Number of archive records for an author.
    pub async fn count_for_author(pool: &PgPool, author_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM archived_theses WHERE author_id = $1")
                .bind(author_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
