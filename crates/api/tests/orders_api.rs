//! Customer orders.

mod common;

use aqar_db::repositories::AuditLogRepo;
use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

const ALL_ORDERS: &[&str] = &["orders_view", "orders_add", "orders_edit", "orders_delete"];

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_with_lenient_numbers(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "desk", ALL_ORDERS).await;

    let body = json!({
        "customer_name": "أبو فهد",
        "unit_type": "شقة",
        "area": "150",
        "price": 2500,
        "phone": "0500000000",
    });
    let response = post_json_auth(test.app(), "/api/v1/orders", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["area"], 150);
    assert_eq!(json["data"]["price"], 2500.0);
    assert_eq!(json["data"]["location"], "");

    let logs = AuditLogRepo::list_recent(&pool, Some(1)).await.unwrap();
    assert_eq!(logs[0].action, "إضافة طلب جديد: أبو فهد");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_requires_name_and_unit(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "desk", ALL_ORDERS).await;

    for body in [
        json!({ "customer_name": " ", "unit_type": "شقة" }),
        json!({ "customer_name": "سعد" }),
    ] {
        let response = post_json_auth(test.app(), "/api/v1/orders", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn each_order_action_has_its_own_permission(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let full = common::token_with(&test, &pool, "desk", ALL_ORDERS).await;
    let viewer = common::token_with(&test, &pool, "viewer", &["orders_view"]).await;

    let body = json!({ "customer_name": "سعد", "unit_type": "فيلا" });
    let response = post_json_auth(test.app(), "/api/v1/orders", &viewer, body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let created = body_json(post_json_auth(test.app(), "/api/v1/orders", &full, body).await).await;
    let uri = format!("/api/v1/orders/{}", created["data"]["id"]);

    let response = get_auth(test.app(), &uri, &viewer).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(test.app(), &uri, &viewer, json!({ "unit_type": "x" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(test.app(), &uri, &viewer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_keeps_customer_name(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "desk", ALL_ORDERS).await;

    let body = json!({ "customer_name": "سعد", "unit_type": "فيلا", "area": 300 });
    let created = body_json(post_json_auth(test.app(), "/api/v1/orders", &token, body).await).await;
    let uri = format!("/api/v1/orders/{}", created["data"]["id"]);

    let body = json!({ "customer_name": "غيره", "unit_type": "دوبلكس", "notes": "عاجل" });
    let response = put_json_auth(test.app(), &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["customer_name"], "سعد");
    assert_eq!(json["data"]["unit_type"], "دوبلكس");
    assert_eq!(json["data"]["notes"], "عاجل");
    assert!(json["data"]["area"].is_null());

    let logs = AuditLogRepo::list_recent(&pool, Some(1)).await.unwrap();
    assert_eq!(logs[0].action, "تعديل الطلب: سعد");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_and_delete_orders(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = common::token_with(&test, &pool, "desk", ALL_ORDERS).await;

    for name in ["أول", "ثاني"] {
        let body = json!({ "customer_name": name, "unit_type": "شقة" });
        post_json_auth(test.app(), "/api/v1/orders", &token, body).await;
    }

    let json = body_json(get_auth(test.app(), "/api/v1/orders", &token).await).await;
    let orders = json["data"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["customer_name"], "ثاني");

    let uri = format!("/api/v1/orders/{}", orders[0]["id"]);
    let response = delete_auth(test.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(test.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let logs = AuditLogRepo::list_recent(&pool, Some(1)).await.unwrap();
    assert_eq!(logs[0].action, "حذف الطلب: ثاني");
}
