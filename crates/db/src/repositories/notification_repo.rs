//! Repository for the `notifications` and `mail_notifications` tables.

use praktika_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{MailNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, recipient_id, content, is_read, read_at, created_at";

/// Column list for `mail_notifications` queries.
const MAIL_COLUMNS: &str = "id, recipient_id, subject, body, created_at";

/// Provides CRUD operations for in-app notifications and the mail outbox.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create an in-app notification, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        recipient_id: DbId,
        content: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (recipient_id, content) \
             VALUES ($1, $2) \
             RETURNING id",
        )
        .bind(recipient_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Queue an outbound mail message, returning the generated ID.
    pub async fn create_mail(
        pool: &PgPool,
        recipient_id: DbId,
        subject: &str,
        body: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO mail_notifications (recipient_id, subject, body) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(recipient_id)
        .bind(subject)
        .bind(body)
        .fetch_one(pool)
        .await
    }

    /// List notifications for a recipient, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with `is_read = false`
    /// are returned.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE recipient_id = $1 {filter} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read. Idempotent: marking an already
    /// read notification succeeds and keeps the original `read_at`.
    ///
    /// Returns `true` if the notification exists for the given recipient,
    /// `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        recipient_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = COALESCE(read_at, NOW()) \
             WHERE id = $1 AND recipient_id = $2",
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread notifications for a recipient.
    pub async fn unread_count(pool: &PgPool, recipient_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// List queued mail for a recipient, newest first (used by tests and the
    /// external outbox drainer).
    pub async fn list_mail_for_recipient(
        pool: &PgPool,
        recipient_id: DbId,
    ) -> Result<Vec<MailNotification>, sqlx::Error> {
        let query = format!(
            "SELECT {MAIL_COLUMNS} FROM mail_notifications \
             WHERE recipient_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MailNotification>(&query)
            .bind(recipient_id)
            .fetch_all(pool)
            .await
    }
}
