#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use aqar_api::auth::jwt::JwtConfig;
use aqar_api::auth::password::hash_password;
use aqar_api::config::{AdminSeed, ServerConfig, StorageConfig};
use aqar_api::router::build_app_router;
use aqar_api::state::AppState;
use aqar_api::storage::LocalImageStore;
use aqar_core::permissions::PermissionSet;
use aqar_db::models::employee::{CreateEmployee, Employee};
use aqar_db::repositories::EmployeeRepo;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "secret-pass-1";
const BOUNDARY: &str = "----aqar-test-boundary";

/// Router plus the temporary upload directory backing its image store.
///
/// The directory is removed when this value is dropped, so keep it alive for
/// the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    pub fn upload_path(&self, name: &str) -> std::path::PathBuf {
        self.uploads.path().join(name)
    }
}

pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        storage: StorageConfig::Local {
            upload_dir: upload_dir.to_path_buf(),
        },
        admin: AdminSeed {
            username: "admin".to_string(),
            password: None,
        },
    }
}

/// Build the production router against `pool`, storing images in a fresh
/// temporary directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let uploads = tempfile::tempdir().expect("tempdir");
    let config = test_config(uploads.path());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images: Arc::new(LocalImageStore::new(uploads.path())),
    };
    TestApp {
        router: build_app_router(state, &config),
        uploads,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an employee holding exactly `permissions`, password [`TEST_PASSWORD`].
pub async fn create_employee(pool: &PgPool, username: &str, permissions: &[&str]) -> Employee {
    let input = CreateEmployee {
        name: format!("موظف {username}"),
        role: "مسوق".to_string(),
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hash"),
        permissions: PermissionSet::new(permissions.iter().map(|p| p.to_string()).collect()),
    };
    EmployeeRepo::create(pool, &input).await.expect("create employee")
}

/// Log in through the API and return the access token.
pub async fn login(app: Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), 200, "login for {username} failed");
    let json = body_json(response).await;
    json["access_token"].as_str().expect("access_token").to_string()
}

/// Create an employee with `permissions` and return their access token.
pub async fn token_with(test: &TestApp, pool: &PgPool, username: &str, permissions: &[&str]) -> String {
    create_employee(pool, username, permissions).await;
    login(test.app(), username).await
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request")
}

fn with_auth(builder: axum::http::request::Builder, token: &str) -> axum::http::request::Builder {
    builder.header(header::AUTHORIZATION, format!("Bearer {token}"))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = with_auth(Request::builder().uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = with_auth(Request::builder().method(Method::DELETE).uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn json_with_auth(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method(method).uri(uri), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_with_auth(app, Method::POST, uri, token, body).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_with_auth(app, Method::PUT, uri, token, body).await
}

/// A file part for [`multipart_body`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

/// Encode text fields and files as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], files: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for file in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn multipart_with_auth(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = with_auth(Request::builder().method(method).uri(uri), token)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: Vec<u8>,
) -> Response<Body> {
    multipart_with_auth(app, Method::POST, uri, token, body).await
}

pub async fn put_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: Vec<u8>,
) -> Response<Body> {
    multipart_with_auth(app, Method::PUT, uri, token, body).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}
