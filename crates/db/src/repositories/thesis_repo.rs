//! Repository for the `current_theses` table, including the archival commit.

use praktika_core::thesis::ThesisStatus;
use praktika_core::types::DbId;
use sqlx::PgPool;

use crate::models::archive::{ArchivedThesis, CreateArchivedThesis};
use crate::models::thesis::{CreateCurrentThesis, CurrentThesis};

/// Column list for `current_theses` queries.
const COLUMNS: &str = "id, title, status, archived, author_id, supervisor_id, area_id, \
     worktype_id, text_uri, presentation_uri, supervisor_review_uri, reviewer_review_uri, \
     code_link, deleted, created_at, updated_at";

/// Column list for `archived_theses` queries.
const ARCHIVE_COLUMNS: &str = "id, worktype_id, course_id, area_id, title, author_name, \
     author_id, supervisor_id, publish_year, text_uri, presentation_uri, \
     supervisor_review_uri, reviewer_review_uri, source_uri, created_at";

/// Provides CRUD operations and the archival transaction for current theses.
pub struct ThesisRepo;

impl ThesisRepo {
    /// Create a current thesis, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCurrentThesis,
    ) -> Result<CurrentThesis, sqlx::Error> {
        let query = format!(
            "INSERT INTO current_theses \
                (title, author_id, supervisor_id, area_id, worktype_id, text_uri, \
                 presentation_uri, supervisor_review_uri, reviewer_review_uri, code_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CurrentThesis>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.supervisor_id)
            .bind(input.area_id)
            .bind(input.worktype_id)
            .bind(&input.text_uri)
            .bind(&input.presentation_uri)
            .bind(&input.supervisor_review_uri)
            .bind(&input.reviewer_review_uri)
            .bind(&input.code_link)
            .fetch_one(pool)
            .await
    }

    /// Find a thesis by id (soft-deleted rows included; callers decide).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CurrentThesis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM current_theses WHERE id = $1");
        sqlx::query_as::<_, CurrentThesis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List theses for an area/worktype selection with the given status.
    ///
    /// Only titled, non-deleted rows are returned, matching what the admin
    /// pages show.
    pub async fn list_for_selection(
        pool: &PgPool,
        area_id: DbId,
        worktype_id: DbId,
        status: ThesisStatus,
    ) -> Result<Vec<CurrentThesis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM current_theses \
             WHERE area_id = $1 AND worktype_id = $2 AND status = $3 \
               AND deleted = false AND title IS NOT NULL \
             ORDER BY id"
        );
        sqlx::query_as::<_, CurrentThesis>(&query)
            .bind(area_id)
            .bind(worktype_id)
            .bind(status.id())
            .fetch_all(pool)
            .await
    }

    /// Set the status of a thesis.
    ///
    /// Returns `true` if a non-deleted row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ThesisStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE current_theses \
             SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .bind(status.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Finish every in-progress, titled, non-deleted thesis of a selection.
    ///
    /// Returns the number of theses finished.
    pub async fn finish_all(
        pool: &PgPool,
        area_id: DbId,
        worktype_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE current_theses \
             SET status = $3, updated_at = NOW() \
             WHERE area_id = $1 AND worktype_id = $2 AND status = $4 \
               AND deleted = false AND title IS NOT NULL",
        )
        .bind(area_id)
        .bind(worktype_id)
        .bind(ThesisStatus::Finished.id())
        .bind(ThesisStatus::InProgress.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Set the title of a thesis. Returns `true` if a row was updated.
    pub async fn set_title(pool: &PgPool, id: DbId, title: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE current_theses \
             SET title = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .bind(title)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Commit an archival: insert the archive record and mark the source
    /// thesis archived + finished, atomically.
    ///
    /// The source update is guarded with `archived = false`, so a thesis can
    /// be archived at most once; a second attempt returns `Ok(None)` without
    /// creating a duplicate record.
    pub async fn archive(
        pool: &PgPool,
        thesis_id: DbId,
        record: &CreateArchivedThesis,
    ) -> Result<Option<ArchivedThesis>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let flipped = sqlx::query(
            "UPDATE current_theses \
             SET archived = true, status = $2, updated_at = NOW() \
             WHERE id = $1 AND archived = false AND deleted = false",
        )
        .bind(thesis_id)
        .bind(ThesisStatus::Finished.id())
        .execute(&mut *tx)
        .await?;

        if flipped.rows_affected() == 0 {
            // Already archived (or deleted); the transaction rolls back on drop.
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO archived_theses \
                (worktype_id, course_id, area_id, title, author_name, author_id, \
                 supervisor_id, publish_year, text_uri, presentation_uri, \
                 supervisor_review_uri, reviewer_review_uri, source_uri) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {ARCHIVE_COLUMNS}"
        );
        let archived = sqlx::query_as::<_, ArchivedThesis>(&query)
            .bind(record.worktype_id)
            .bind(record.course_id)
            .bind(record.area_id)
            .bind(&record.title)
            .bind(&record.author_name)
            .bind(record.author_id)
            .bind(record.supervisor_id)
            .bind(record.publish_year)
            .bind(&record.text_uri)
            .bind(&record.presentation_uri)
            .bind(&record.supervisor_review_uri)
            .bind(&record.reviewer_review_uri)
            .bind(&record.source_uri)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(archived))
    }
}
