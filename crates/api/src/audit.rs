//! Audit trail helpers.
//!
//! Every mutating handler calls [`record`] after its change is committed.
//! Action strings are Arabic, matching what staff read in the log view.

use aqar_core::district::District;
use aqar_core::permissions::OfferKind;
use aqar_db::repositories::AuditLogRepo;

use crate::state::AppState;

pub const LOGIN: &str = "تسجيل دخول";
pub const LOGOUT: &str = "تسجيل خروج";

/// Append an audit entry. A failed insert is logged, never returned: the
/// change it describes has already happened.
pub async fn record(state: &AppState, username: &str, action: &str) {
    if let Err(e) = AuditLogRepo::insert(&state.pool, username, action).await {
        tracing::error!(error = %e, username, action, "Failed to write audit log entry");
    }
}

pub fn employee_added(name: &str) -> String {
    format!("إضافة موظف جديد: {name}")
}

pub fn employee_edited(name: &str) -> String {
    format!("تعديل الموظف: {name}")
}

pub fn employee_deleted(name: &str) -> String {
    format!("حذف الموظف: {name}")
}

pub fn offer_added(kind: OfferKind, district: District, unit_type: &str) -> String {
    format!("إضافة {} {}: {unit_type}", kind.label(), district.as_stored())
}

pub fn offer_edited(kind: OfferKind, district: District, unit_type: &str) -> String {
    format!("تعديل {} {}: {unit_type}", kind.label(), district.as_stored())
}

pub fn offer_deleted(kind: OfferKind, district: District, unit_type: &str) -> String {
    format!("حذف {} {}: {unit_type}", kind.label(), district.as_stored())
}

pub fn order_added(customer_name: &str) -> String {
    format!("إضافة طلب جديد: {customer_name}")
}

pub fn order_edited(customer_name: &str) -> String {
    format!("تعديل الطلب: {customer_name}")
}

pub fn order_deleted(customer_name: &str) -> String {
    format!("حذف الطلب: {customer_name}")
}

pub fn property_added(name: &str) -> String {
    format!("إضافة عقار: {name}")
}

pub fn property_edited(name: &str) -> String {
    format!("تعديل العقار: {name}")
}

pub fn property_deleted(name: &str) -> String {
    format!("حذف العقار: {name}")
}
