//! Stateless validation predicates.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot after it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("valid name regex"));

const MIN_NAME_LEN: usize = 3;

/// Returns true if `email` has the general `local@domain` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if the trimmed name has at least three characters.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

/// Full field rule for names: long enough and letters/whitespace only.
pub fn is_valid_name_field(name: &str) -> bool {
    is_valid_name(name) && NAME_PATTERN.is_match(name)
}

/// Returns true unless `date` falls strictly after `today`.
///
/// Both sides are calendar dates, so time of day never matters.
pub fn is_not_future(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

/// Parse a complete `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Long display form, e.g. `January 15, 2023`. Presentation only.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
