//! Repository for the `properties` table.

use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::{Property, PropertyFields};

const COLUMNS: &str = "id, name, property_type, district, area, front, street, owner_status, \
                        images, created_at, updated_at";

pub struct PropertyRepo;

impl PropertyRepo {
    pub async fn create(
        pool: &PgPool,
        f: &PropertyFields,
        images: &[String],
    ) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties
                (name, property_type, district, area, front, street, owner_status, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&f.name)
            .bind(&f.property_type)
            .bind(&f.district)
            .bind(f.area)
            .bind(&f.front)
            .bind(&f.street)
            .bind(&f.owner_status)
            .bind(images)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All properties ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }

    /// Overwrite the property's fields. `images` replaces the stored list
    /// when `Some`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        f: &PropertyFields,
        images: Option<&[String]>,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                name = $2,
                property_type = $3,
                district = $4,
                area = $5,
                front = $6,
                street = $7,
                owner_status = $8,
                images = COALESCE($9, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&f.name)
            .bind(&f.property_type)
            .bind(&f.district)
            .bind(f.area)
            .bind(&f.front)
            .bind(&f.street)
            .bind(&f.owner_status)
            .bind(images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property. Rental offers pointing at it keep their row with
    /// `property_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("DELETE FROM properties WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
