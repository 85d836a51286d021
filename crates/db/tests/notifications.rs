//! Integration tests for the notification repository (in-app + mail outbox).

use praktika_core::types::DbId;
use praktika_db::models::user::CreateUser;
use praktika_db::repositories::{NotificationRepo, UserRepo};
use sqlx::PgPool;

async fn new_user(pool: &PgPool, email: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            password_hash: "x".to_string(),
            role: "student".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test]
async fn create_list_and_mark_read(pool: PgPool) {
    let user = new_user(&pool, "u@test").await;

    let id = NotificationRepo::create(&pool, user, "first").await.unwrap();
    NotificationRepo::create(&pool, user, "second").await.unwrap();

    assert_eq!(NotificationRepo::unread_count(&pool, user).await.unwrap(), 2);

    assert!(NotificationRepo::mark_read(&pool, id, user).await.unwrap());
    assert_eq!(NotificationRepo::unread_count(&pool, user).await.unwrap(), 1);

    let unread = NotificationRepo::list_for_recipient(&pool, user, true, 50, 0)
        .await
        .unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].content, "second");

    let all = NotificationRepo::list_for_recipient(&pool, user, false, 50, 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test]
async fn mark_read_is_idempotent_and_keeps_read_at(pool: PgPool) {
    let user = new_user(&pool, "u@test").await;
    let id = NotificationRepo::create(&pool, user, "hello").await.unwrap();

    assert!(NotificationRepo::mark_read(&pool, id, user).await.unwrap());
    let first = NotificationRepo::list_for_recipient(&pool, user, false, 50, 0)
        .await
        .unwrap();
    let read_at = first[0].read_at.expect("read_at set on first mark");

    // Repeating the call succeeds and does not move the timestamp.
    assert!(NotificationRepo::mark_read(&pool, id, user).await.unwrap());
    let second = NotificationRepo::list_for_recipient(&pool, user, false, 50, 0)
        .await
        .unwrap();
    assert!(second[0].is_read);
    assert_eq!(second[0].read_at, Some(read_at));
}

#[sqlx::test]
async fn mark_read_is_scoped_to_the_recipient(pool: PgPool) {
    let owner = new_user(&pool, "owner@test").await;
    let other = new_user(&pool, "other@test").await;

    let id = NotificationRepo::create(&pool, owner, "private").await.unwrap();

    assert!(!NotificationRepo::mark_read(&pool, id, other).await.unwrap());
    assert_eq!(NotificationRepo::unread_count(&pool, owner).await.unwrap(), 1);
}

#[sqlx::test]
async fn mail_outbox_stores_subject_and_body(pool: PgPool) {
    let user = new_user(&pool, "u@test").await;

    NotificationRepo::create_mail(&pool, user, "Subject", "Body text")
        .await
        .unwrap();

    let mail = NotificationRepo::list_mail_for_recipient(&pool, user).await.unwrap();
    assert_eq!(mail.len(), 1);
    assert_eq!(mail[0].subject, "Subject");
    assert_eq!(mail[0].body, "Body text");
}
