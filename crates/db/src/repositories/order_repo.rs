//! Repository for the `orders` table.

use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, UpdateOrder};

const COLUMNS: &str = "id, customer_name, unit_type, area, price, location, phone, \
                        marketer, notes, created_at, updated_at";

pub struct OrderRepo;

impl OrderRepo {
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders
                (customer_name, unit_type, area, price, location, phone, marketer, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(&input.customer_name)
            .bind(&input.unit_type)
            .bind(input.area)
            .bind(input.price)
            .bind(&input.location)
            .bind(&input.phone)
            .bind(&input.marketer)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All orders, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                unit_type = $2,
                area = $3,
                price = $4,
                location = $5,
                phone = $6,
                marketer = $7,
                notes = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(&input.unit_type)
            .bind(input.area)
            .bind(input.price)
            .bind(&input.location)
            .bind(&input.phone)
            .bind(&input.marketer)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("DELETE FROM orders WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM orders")
            .fetch_one(pool)
            .await
    }
}
