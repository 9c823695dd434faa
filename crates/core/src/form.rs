//! Coercion of raw form values into column values.
//!
//! Listing forms are filled in by hand, so numeric fields arrive as free
//! text ("1,250,000", "", "  90 "). Parsing is deliberately lenient: a value
//! that cannot be read becomes `None` instead of rejecting the whole form.

/// Limit for short labels such as floor, front, owner type and status.
pub const SHORT_TEXT: usize = 50;
/// Limit for person names and marketer names.
pub const NAME_TEXT: usize = 100;
/// Limit for unit types and order text fields.
pub const UNIT_TEXT: usize = 200;
/// Limit for sale offer details.
pub const DETAILS_TEXT: usize = 1000;
/// Limit for notes, locations and rental details.
pub const LONG_TEXT: usize = 2100;

/// Parse a decimal amount (price, area, sale limit).
///
/// Blank input and unparseable or non-finite values yield `None`. Thousands
/// separators are ignored.
pub fn parse_decimal(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a whole number (order area).
///
/// Accepts a decimal rendering only when it has no fractional part, so
/// `"120.0"` reads as `120` while `"120.5"` is rejected.
pub fn parse_whole(raw: Option<&str>) -> Option<i32> {
    let value = parse_decimal(raw)?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

/// Trim surrounding whitespace and cut to at most `max_chars` characters.
///
/// Counts characters, not bytes, so Arabic input never splits mid code point.
pub fn clip(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// [`clip`] for optional input; missing values become an empty string,
/// matching how the forms store untouched fields.
pub fn clip_opt(value: Option<&str>, max_chars: usize) -> String {
    value.map(|v| clip(v, max_chars)).unwrap_or_default()
}
