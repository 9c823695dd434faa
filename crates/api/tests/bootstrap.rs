//! First-run administrator seeding.

mod common;

use aqar_api::bootstrap::ensure_admin;
use aqar_api::config::AdminSeed;
use aqar_core::permissions;
use aqar_db::repositories::EmployeeRepo;
use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

fn seed(password: Option<&str>) -> AdminSeed {
    AdminSeed {
        username: "admin".to_string(),
        password: password.map(str::to_string),
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_table_gets_an_admin_with_every_permission(pool: PgPool) {
    let admin = ensure_admin(&pool, &seed(Some("first-admin-pass")))
        .await
        .unwrap()
        .expect("admin created");

    assert_eq!(admin.username, "admin");
    let mut granted = admin.permission_set().tags().to_vec();
    let mut expected = permissions::all_tags();
    granted.sort();
    expected.sort();
    assert_eq!(granted, expected);
    assert_eq!(EmployeeRepo::count(&pool).await.unwrap(), 1);

    let test = common::build_test_app(pool);
    let body = json!({ "username": "admin", "password": "first-admin-pass" });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["employee"]["username"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn existing_employees_skip_seeding(pool: PgPool) {
    common::create_employee(&pool, "someone", &[]).await;

    let created = ensure_admin(&pool, &seed(Some("first-admin-pass"))).await.unwrap();
    assert!(created.is_none());
    assert_eq!(EmployeeRepo::count(&pool).await.unwrap(), 1);
    assert!(EmployeeRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_password_skips_seeding(pool: PgPool) {
    let created = ensure_admin(&pool, &seed(None)).await.unwrap();
    assert!(created.is_none());
    assert_eq!(EmployeeRepo::count(&pool).await.unwrap(), 0);
}
