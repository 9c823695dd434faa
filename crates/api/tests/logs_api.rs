//! Audit log listing.

mod common;

use aqar_db::repositories::AuditLogRepo;
use axum::http::StatusCode;
use common::{body_json, get_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn logs_newest_first_with_limit(pool: PgPool) {
    for i in 0..5 {
        AuditLogRepo::insert(&pool, "system", &format!("حدث {i}"))
            .await
            .unwrap();
    }
    let test = common::build_test_app(pool.clone());
    // Logging in adds one more entry.
    let token = common::token_with(&test, &pool, "auditor", &["logs_view"]).await;

    let json = body_json(get_auth(test.app(), "/api/v1/logs", &token).await).await;
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 6);
    assert_eq!(logs[0]["action"], "تسجيل دخول");
    assert_eq!(logs[1]["action"], "حدث 4");
    assert!(logs[0]["timestamp"].is_string());

    let json = body_json(get_auth(test.app(), "/api/v1/logs?limit=2", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logs_require_logs_view(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "nosy", &["orders_view"]).await;

    let response = get_auth(test.app(), "/api/v1/logs", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bad_limit_is_rejected(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "auditor", &["logs_view"]).await;

    let response = get_auth(test.app(), "/api/v1/logs?limit=lots", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
