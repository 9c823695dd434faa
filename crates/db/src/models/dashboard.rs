use serde::Serialize;

/// Headline counts shown on the landing dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardCounts {
    pub employees: i64,
    pub rental_offers_central: i64,
    pub rental_offers_south: i64,
    pub sale_offers_central: i64,
    pub sale_offers_south: i64,
    pub orders: i64,
}
