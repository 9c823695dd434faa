//! Repository for the `sale_offers` table.
//!
//! Mirrors [`RentalOfferRepo`](super::RentalOfferRepo): district-scoped
//! lookups, full-overwrite updates, and deletes that hand back the row.

use aqar_core::district::District;
use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::sale_offer::{CreateSaleOffer, SaleOffer, SaleOfferFields};

const COLUMNS: &str = "id, district, unit_type, floor, front, street, area, price, sale_limit, \
                        location, details, marketer, owner_type, status, notes, images, \
                        created_by, created_at, updated_at";

pub struct SaleOfferRepo;

impl SaleOfferRepo {
    pub async fn create(pool: &PgPool, input: &CreateSaleOffer) -> Result<SaleOffer, sqlx::Error> {
        let f = &input.fields;
        let query = format!(
            "INSERT INTO sale_offers
                (district, unit_type, floor, front, street, area, price, sale_limit,
                 location, details, marketer, owner_type, status, notes, images, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(input.district.as_stored())
            .bind(&f.unit_type)
            .bind(&f.floor)
            .bind(&f.front)
            .bind(&f.street)
            .bind(f.area)
            .bind(f.price)
            .bind(f.sale_limit)
            .bind(&f.location)
            .bind(&f.details)
            .bind(&f.marketer)
            .bind(&f.owner_type)
            .bind(&f.status)
            .bind(&f.notes)
            .bind(&input.images)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SaleOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sale_offers WHERE id = $1");
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_in_district(
        pool: &PgPool,
        district: District,
        id: DbId,
    ) -> Result<Option<SaleOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sale_offers WHERE id = $1 AND district = $2");
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .fetch_optional(pool)
            .await
    }

    /// All offers of a district, newest first.
    pub async fn list_by_district(
        pool: &PgPool,
        district: District,
    ) -> Result<Vec<SaleOffer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sale_offers
             WHERE district = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(district.as_stored())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        district: District,
        id: DbId,
        f: &SaleOfferFields,
        images: Option<&[String]>,
    ) -> Result<Option<SaleOffer>, sqlx::Error> {
        let query = format!(
            "UPDATE sale_offers SET
                unit_type = $3,
                floor = $4,
                front = $5,
                street = $6,
                area = $7,
                price = $8,
                sale_limit = $9,
                location = $10,
                details = $11,
                marketer = $12,
                owner_type = $13,
                status = $14,
                notes = $15,
                images = COALESCE($16, images)
             WHERE id = $1 AND district = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .bind(&f.unit_type)
            .bind(&f.floor)
            .bind(&f.front)
            .bind(&f.street)
            .bind(f.area)
            .bind(f.price)
            .bind(f.sale_limit)
            .bind(&f.location)
            .bind(&f.details)
            .bind(&f.marketer)
            .bind(&f.owner_type)
            .bind(&f.status)
            .bind(&f.notes)
            .bind(images)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        district: District,
        id: DbId,
    ) -> Result<Option<SaleOffer>, sqlx::Error> {
        let query = format!(
            "DELETE FROM sale_offers WHERE id = $1 AND district = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SaleOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .fetch_optional(pool)
            .await
    }

    pub async fn count_by_district(pool: &PgPool, district: District) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM sale_offers WHERE district = $1",
        )
        .bind(district.as_stored())
        .fetch_one(pool)
        .await
    }
}
