//! In-app notification and mail-outbox models.

use praktika_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table (in-app message).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub content: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A row from the `mail_notifications` outbox table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MailNotification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub subject: String,
    pub body: String,
    pub created_at: Timestamp,
}
