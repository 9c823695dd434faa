//! Aggregate counts for the dashboard.

use sqlx::PgPool;

use aqar_core::district::District;

use crate::models::dashboard::DashboardCounts;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Gather all headline counts in a single round trip.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let row: (i64, i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM employees)::BIGINT,
                (SELECT COUNT(*) FROM rental_offers WHERE district = $1)::BIGINT,
                (SELECT COUNT(*) FROM rental_offers WHERE district = $2)::BIGINT,
                (SELECT COUNT(*) FROM sale_offers WHERE district = $1)::BIGINT,
                (SELECT COUNT(*) FROM sale_offers WHERE district = $2)::BIGINT,
                (SELECT COUNT(*) FROM orders)::BIGINT",
        )
        .bind(District::Central.as_stored())
        .bind(District::South.as_stored())
        .fetch_one(pool)
        .await?;

        tracing::debug!(employees = row.0, orders = row.5, "Dashboard counts loaded");

        Ok(DashboardCounts {
            employees: row.0,
            rental_offers_central: row.1,
            rental_offers_south: row.2,
            sale_offers_central: row.3,
            sale_offers_south: row.4,
            orders: row.5,
        })
    }
}
