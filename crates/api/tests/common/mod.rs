//! Shared helpers for HTTP-level integration tests.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use praktika_api::auth::jwt::{generate_access_token, JwtConfig};
use praktika_api::auth::password::hash_password;
use praktika_api::config::ServerConfig;
use praktika_api::export::LoggingExporter;
use praktika_api::router::build_app_router;
use praktika_api::state::AppState;
use praktika_core::roles::{ROLE_STAFF, ROLE_STUDENT};
use praktika_core::storage::StorageLayout;
use praktika_db::models::thesis::{CreateCurrentThesis, CurrentThesis};
use praktika_db::models::user::{CreateUser, User};
use praktika_db::repositories::{ThesisRepo, UserRepo};

/// Seeded catalog rows the tests rely on.
pub const AREA_SE: i64 = 2;
pub const WORKTYPE_BACHELOR: i64 = 5;
pub const COURSE_BACHELOR: i64 = 1;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config(storage_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_root: storage_root.to_path_buf(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and storage root.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool, storage_root: &Path) -> Router {
    let config = test_config(storage_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(StorageLayout::new(storage_root)),
        exporter: Arc::new(LoggingExporter),
    };
    build_app_router(state, &config)
}

/// Mint a Bearer token for a user without going through the login endpoint.
pub fn token_for(user: &User, storage_root: &Path) -> String {
    let config = test_config(storage_root);
    generate_access_token(user.id, &user.role, &config.jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a staff user directly in the database.
pub async fn create_staff(pool: &PgPool, email: &str) -> (User, String) {
    create_user(pool, email, ROLE_STAFF).await
}

/// Create a student user directly in the database.
pub async fn create_student(pool: &PgPool, email: &str) -> (User, String) {
    create_user(pool, email, ROLE_STUDENT).await
}

async fn create_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let input = CreateUser {
        email: email.to_string(),
        full_name: format!("Test {role}"),
        password_hash: hash_password(password).expect("hashing should succeed"),
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Create a titled bachelor thesis in the seeded software engineering area.
pub async fn create_thesis(pool: &PgPool, author_id: i64, title: &str) -> CurrentThesis {
    let input = CreateCurrentThesis {
        title: Some(title.to_string()),
        author_id,
        area_id: AREA_SE,
        worktype_id: WORKTYPE_BACHELOR,
        ..Default::default()
    };
    ThesisRepo::create(pool, &input)
        .await
        .expect("thesis creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a `multipart/form-data` body built by [`MultipartBody`].
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: MultipartBody,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", body.boundary),
        )
        .body(Body::from(body.finish()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response status and return the JSON body.
pub async fn assert_status_json(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Multipart body builder
// ---------------------------------------------------------------------------

/// Hand-rolled `multipart/form-data` encoder for tests.
pub struct MultipartBody {
    pub boundary: &'static str,
    buf: Vec<u8>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "praktika-test-boundary",
            buf: Vec::new(),
        }
    }

    /// Add a plain text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.buf.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    /// Add a file field.
    pub fn file(mut self, name: &str, filename: &str, content: &[u8]) -> Self {
        self.buf
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.buf.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(content);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.buf
    }
}
