//! Repository for the `rental_offers` table.
//!
//! Every lookup that originates from a district-scoped route filters on the
//! district as well as the id, so an offer is invisible under the wrong
//! district even when the caller guesses its id.

use aqar_core::district::District;
use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental_offer::{CreateRentalOffer, RentalOffer, RentalOfferFields};

const COLUMNS: &str = "id, property_id, district, unit_type, floor, area, price, details, \
                        owner_type, location, marketer, notes, status, images, \
                        created_at, updated_at";

pub struct RentalOfferRepo;

impl RentalOfferRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRentalOffer,
    ) -> Result<RentalOffer, sqlx::Error> {
        let f = &input.fields;
        let query = format!(
            "INSERT INTO rental_offers
                (district, property_id, unit_type, floor, area, price, details,
                 owner_type, location, marketer, notes, status, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(input.district.as_stored())
            .bind(f.property_id)
            .bind(&f.unit_type)
            .bind(&f.floor)
            .bind(f.area)
            .bind(f.price)
            .bind(&f.details)
            .bind(&f.owner_type)
            .bind(&f.location)
            .bind(&f.marketer)
            .bind(&f.notes)
            .bind(&f.status)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RentalOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rental_offers WHERE id = $1");
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an offer only if it belongs to `district`.
    pub async fn find_in_district(
        pool: &PgPool,
        district: District,
        id: DbId,
    ) -> Result<Option<RentalOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rental_offers WHERE id = $1 AND district = $2");
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .fetch_optional(pool)
            .await
    }

    /// All offers of a district, newest first.
    pub async fn list_by_district(
        pool: &PgPool,
        district: District,
    ) -> Result<Vec<RentalOffer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rental_offers
             WHERE district = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(district.as_stored())
            .fetch_all(pool)
            .await
    }

    /// Overwrite the editable attributes of an offer in `district`.
    ///
    /// `images` replaces the stored list when `Some`; `None` keeps it.
    pub async fn update(
        pool: &PgPool,
        district: District,
        id: DbId,
        f: &RentalOfferFields,
        images: Option<&[String]>,
    ) -> Result<Option<RentalOffer>, sqlx::Error> {
        let query = format!(
            "UPDATE rental_offers SET
                property_id = $3,
                unit_type = $4,
                floor = $5,
                area = $6,
                price = $7,
                details = $8,
                owner_type = $9,
                location = $10,
                marketer = $11,
                notes = $12,
                status = $13,
                images = COALESCE($14, images)
             WHERE id = $1 AND district = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .bind(f.property_id)
            .bind(&f.unit_type)
            .bind(&f.floor)
            .bind(f.area)
            .bind(f.price)
            .bind(&f.details)
            .bind(&f.owner_type)
            .bind(&f.location)
            .bind(&f.marketer)
            .bind(&f.notes)
            .bind(&f.status)
            .bind(images)
            .fetch_optional(pool)
            .await
    }

    /// Delete an offer in `district`, returning the removed row so the
    /// caller can clean up its images.
    pub async fn delete(
        pool: &PgPool,
        district: District,
        id: DbId,
    ) -> Result<Option<RentalOffer>, sqlx::Error> {
        let query = format!(
            "DELETE FROM rental_offers WHERE id = $1 AND district = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RentalOffer>(&query)
            .bind(id)
            .bind(district.as_stored())
            .fetch_optional(pool)
            .await
    }

    pub async fn count_by_district(pool: &PgPool, district: District) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM rental_offers WHERE district = $1",
        )
        .bind(district.as_stored())
        .fetch_one(pool)
        .await
    }
}
