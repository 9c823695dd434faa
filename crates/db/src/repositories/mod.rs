//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod audit_repo;
pub mod dashboard_repo;
pub mod employee_repo;
pub mod order_repo;
pub mod property_repo;
pub mod rental_offer_repo;
pub mod sale_offer_repo;
pub mod session_repo;

pub use audit_repo::AuditLogRepo;
pub use dashboard_repo::DashboardRepo;
pub use employee_repo::EmployeeRepo;
pub use order_repo::OrderRepo;
pub use property_repo::PropertyRepo;
pub use rental_offer_repo::RentalOfferRepo;
pub use sale_offer_repo::SaleOfferRepo;
pub use session_repo::SessionRepo;
