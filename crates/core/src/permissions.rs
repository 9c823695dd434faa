//! Permission tags and the per-employee permission list.
//!
//! Every gated route names one tag. An employee carries a list of tags,
//! persisted as a JSON array of strings in the `employees.permissions`
//! column. Offer tags are district-scoped: `rentalm_offers_edit` allows
//! editing central rental offers only.

use serde::Serialize;

use crate::district::District;
use crate::error::CoreError;

pub const LOGS_VIEW: &str = "logs_view";
pub const LIST_EMPLOYEES: &str = "list_employees";
pub const ADD_EMPLOYEE: &str = "add_employee";
pub const EDIT_EMPLOYEE: &str = "edit_employee";
pub const DELETE_EMPLOYEE: &str = "delete_employee";
pub const ORDERS_VIEW: &str = "orders_view";
pub const ORDERS_ADD: &str = "orders_add";
pub const ORDERS_EDIT: &str = "orders_edit";
pub const ORDERS_DELETE: &str = "orders_delete";
pub const PROPERTIES_VIEW: &str = "properties_view";
pub const PROPERTIES_ADD: &str = "properties_add";
pub const PROPERTIES_EDIT: &str = "properties_edit";
pub const PROPERTIES_DELETE: &str = "properties_delete";

/// Every assignable tag with its display label, in the order the employee
/// form presents them.
pub const CATALOG: &[(&str, &str)] = &[
    (LOGS_VIEW, "عرض السجلات"),
    (LIST_EMPLOYEES, "عرض الموظفين"),
    (ADD_EMPLOYEE, "إضافة موظف"),
    (EDIT_EMPLOYEE, "تعديل الموظف"),
    (DELETE_EMPLOYEE, "حذف الموظف"),
    ("rentalm_offers_view", "عرض عروض الإيجار وسط"),
    ("rentalm_offers_add", "إضافة عرض إيجار وسط"),
    ("rentalm_offers_edit", "تعديل عرض إيجار وسط"),
    ("rentalm_offers_delete", "حذف عرض إيجار وسط"),
    ("rentalw_offers_view", "عرض عروض الإيجار جنوب"),
    ("rentalw_offers_add", "إضافة عرض إيجار جنوب"),
    ("rentalw_offers_edit", "تعديل عرض إيجار جنوب"),
    ("rentalw_offers_delete", "حذف عرض إيجار جنوب"),
    ("salesm_offers_view", "عرض عروض البيع وسط"),
    ("salesm_offers_add", "إضافة عرض بيع وسط"),
    ("salesm_offers_edit", "تعديل عرض بيع وسط"),
    ("salesm_offers_delete", "حذف عرض بيع وسط"),
    ("salesw_offers_view", "عرض عروض البيع جنوب"),
    ("salesw_offers_add", "إضافة عرض بيع جنوب"),
    ("salesw_offers_edit", "تعديل عرض بيع جنوب"),
    ("salesw_offers_delete", "حذف عرض بيع جنوب"),
    (ORDERS_VIEW, "عرض الطلبات"),
    (ORDERS_ADD, "إضافة طلب"),
    (ORDERS_EDIT, "تعديل الطلب"),
    (ORDERS_DELETE, "حذف الطلب"),
    (PROPERTIES_VIEW, "عرض العقارات"),
    (PROPERTIES_ADD, "إضافة عقار"),
    (PROPERTIES_EDIT, "تعديل عقار"),
    (PROPERTIES_DELETE, "حذف عقار"),
];

/// A catalog entry as returned by `GET /permissions`.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionInfo {
    pub tag: &'static str,
    pub label: &'static str,
}

pub fn catalog() -> Vec<PermissionInfo> {
    CATALOG
        .iter()
        .map(|&(tag, label)| PermissionInfo { tag, label })
        .collect()
}

pub fn is_known(tag: &str) -> bool {
    CATALOG.iter().any(|(t, _)| *t == tag)
}

/// Every tag in the catalog. Used to seed the bootstrap administrator.
pub fn all_tags() -> Vec<String> {
    CATALOG.iter().map(|(t, _)| t.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Offer tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    Rental,
    Sale,
}

impl OfferKind {
    fn tag_prefix(self) -> &'static str {
        match self {
            Self::Rental => "rental",
            Self::Sale => "sales",
        }
    }

    /// Arabic noun used in audit log actions (`عرض إيجار` / `عرض بيع`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Rental => "عرض إيجار",
            Self::Sale => "عرض بيع",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
}

impl Action {
    fn tag_suffix(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Build the district-scoped tag for an offer action.
///
/// ```
/// use aqar_core::district::District;
/// use aqar_core::permissions::{offer_permission, Action, OfferKind};
///
/// assert_eq!(
///     offer_permission(OfferKind::Rental, District::Central, Action::View),
///     "rentalm_offers_view"
/// );
/// assert_eq!(
///     offer_permission(OfferKind::Sale, District::South, Action::Delete),
///     "salesw_offers_delete"
/// );
/// ```
pub fn offer_permission(kind: OfferKind, district: District, action: Action) -> String {
    format!(
        "{}{}_offers_{}",
        kind.tag_prefix(),
        district.permission_letter(),
        action.tag_suffix()
    )
}

// ---------------------------------------------------------------------------
// Permission list
// ---------------------------------------------------------------------------

/// The tags granted to one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    tags: Vec<String>,
}

impl PermissionSet {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    /// Parse the stored column value.
    ///
    /// Malformed JSON or anything other than an array yields an empty set
    /// rather than an error, so a corrupted row locks the employee out of
    /// gated routes instead of failing every request. Non-string elements
    /// are kept in their JSON text form.
    pub fn from_stored(raw: &str) -> Self {
        let parsed: serde_json::Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let tags = match parsed {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { tags }
    }

    /// Serialize for the `permissions` column.
    pub fn to_stored(&self) -> String {
        serde_json::to_string(&self.tags).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

/// Clean a submitted tag list: trim, drop blanks and duplicates (first
/// occurrence wins), reject tags missing from the catalog.
pub fn normalize<I, S>(tags: I) -> Result<PermissionSet, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        if !is_known(tag) {
            return Err(CoreError::Validation(format!(
                "Unknown permission '{tag}'"
            )));
        }
        out.push(tag.to_string());
    }
    Ok(PermissionSet::new(out))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_offer_tag_is_in_the_catalog() {
        for kind in [OfferKind::Rental, OfferKind::Sale] {
            for district in District::ALL {
                for action in [Action::View, Action::Add, Action::Edit, Action::Delete] {
                    let tag = offer_permission(kind, district, action);
                    assert!(is_known(&tag), "{tag} missing from catalog");
                }
            }
        }
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut tags: Vec<_> = CATALOG.iter().map(|(t, _)| *t).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), CATALOG.len());
    }

    #[test]
    fn stored_list_parses() {
        let set = PermissionSet::from_stored(r#"["orders_view","logs_view"]"#);
        assert!(set.contains("orders_view"));
        assert!(set.contains("logs_view"));
        assert!(!set.contains("orders_add"));
    }

    #[test]
    fn malformed_stored_list_is_empty() {
        assert!(PermissionSet::from_stored("not json").tags().is_empty());
        assert!(PermissionSet::from_stored(r#"{"a":1}"#).tags().is_empty());
        assert!(PermissionSet::from_stored("").tags().is_empty());
    }

    #[test]
    fn non_string_elements_are_stringified() {
        let set = PermissionSet::from_stored("[1, \"logs_view\"]");
        assert_eq!(set.tags(), ["1".to_string(), "logs_view".to_string()]);
    }

    #[test]
    fn to_stored_is_a_json_array() {
        let set = PermissionSet::new(vec!["orders_view".into()]);
        assert_eq!(set.to_stored(), r#"["orders_view"]"#);
        assert_eq!(PermissionSet::default().to_stored(), "[]");
    }

    #[test]
    fn normalize_trims_and_dedups() {
        let set = normalize([" orders_view", "orders_view", "", "logs_view"]).unwrap();
        assert_eq!(set.tags(), ["orders_view".to_string(), "logs_view".to_string()]);
    }

    #[test]
    fn normalize_rejects_unknown_tags() {
        assert_matches!(normalize(["superuser"]), Err(CoreError::Validation(_)));
    }
}
