//! HTTP-level integration tests for the staff thesis administration surface.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status_json, body_json, create_staff, create_student, create_thesis, get_auth,
    post_auth, post_json_auth, put_json_auth, token_for, AREA_SE, WORKTYPE_BACHELOR,
};
use praktika_db::repositories::NotificationRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn list_theses_returns_selection(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Incremental parsing").await;
    let token = token_for(&staff, storage.path());

    let app = common::build_test_app(pool, storage.path());
    let uri = format!("/api/v1/admin/theses?area_id={AREA_SE}&worktype_id={WORKTYPE_BACHELOR}");
    let response = get_auth(app, &uri, &token).await;
    let json = assert_status_json(response, StatusCode::OK).await;

    let theses = json["data"].as_array().unwrap();
    assert_eq!(theses.len(), 1);
    assert_eq!(theses[0]["id"], thesis.id);
    assert_eq!(theses[0]["title"], "Incremental parsing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn thesis_detail_404_for_unknown_id(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let token = token_for(&staff, storage.path());

    let app = common::build_test_app(pool, storage.path());
    let response = get_auth(app, "/api/v1/admin/theses/999999", &token).await;
    let json = assert_status_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn finish_and_restore_round_trip(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Work").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool, storage.path());

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/admin/theses/{}/finish", thesis.id),
        &token,
    )
    .await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], 2);

    let response = post_auth(
        app,
        &format!("/api/v1/admin/theses/{}/restore", thesis.id),
        &token,
    )
    .await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn finish_all_reports_count(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    create_thesis(&pool, student.id, "First").await;
    create_thesis(&pool, student.id, "Second").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool, storage.path());

    let uri = format!(
        "/api/v1/admin/theses/finish-all?area_id={AREA_SE}&worktype_id={WORKTYPE_BACHELOR}"
    );
    let response = post_auth(app, &uri, &token).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["finished"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn title_edit_updates_and_notifies_author(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Old title").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool.clone(), storage.path());

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/theses/{}/title", thesis.id),
        &token,
        serde_json::json!({ "title": "New title" }),
    )
    .await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["title"], "New title");

    let notifications = NotificationRepo::list_for_recipient(&pool, student.id, false, 10, 0)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].content.contains("Old title"));
    assert!(notifications[0].content.contains("New title"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_title_is_rejected(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Old title").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool, storage.path());

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/theses/{}/title", thesis.id),
        &token,
        serde_json::json!({ "title": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn curator_message_reaches_author_and_outbox(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Work").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool.clone(), storage.path());

    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/theses/{}/notify", thesis.id),
        &token,
        serde_json::json!({ "content": "Deadline is Friday" }),
    )
    .await;
    assert_status_json(response, StatusCode::OK).await;

    let notifications = NotificationRepo::list_for_recipient(&pool, student.id, true, 10, 0)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].content.contains("Deadline is Friday"));

    let mail = NotificationRepo::list_mail_for_recipient(&pool, student.id)
        .await
        .unwrap();
    assert_eq!(mail.len(), 1);
    assert!(mail[0].body.contains("Deadline is Friday"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_curator_message_is_rejected(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (staff, _) = create_staff(&pool, "curator@uni.test").await;
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let thesis = create_thesis(&pool, student.id, "Work").await;
    let token = token_for(&staff, storage.path());
    let app = common::build_test_app(pool, storage.path());

    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/theses/{}/notify", thesis.id),
        &token,
        serde_json::json!({ "content": " " }),
    )
    .await;
    let json = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["error"], "Cannot send an empty notification");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_can_be_repeated(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let id = NotificationRepo::create(&pool, student.id, "hello")
        .await
        .unwrap();
    let token = token_for(&student, storage.path());
    let app = common::build_test_app(pool, storage.path());
    let uri = format!("/api/v1/notifications/{id}/read");

    let response = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Repeating the call is not an error.
    let response = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A notification id that does not belong to the caller is still 404.
    let response = post_auth(app, &format!("/api/v1/notifications/{}/read", id + 999), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn notifications_endpoint_is_scoped_to_caller(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let (student, _) = create_student(&pool, "student@uni.test").await;
    let (other, _) = create_student(&pool, "other@uni.test").await;
    NotificationRepo::create(&pool, student.id, "for student")
        .await
        .unwrap();
    let token = token_for(&other, storage.path());
    let app = common::build_test_app(pool, storage.path());

    let response = get_auth(app.clone(), "/api/v1/notifications", &token).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["unread"], 0);
}
