//! Free-text date input normalization.
//!
//! # Responsibility
//! - Convert a user-typed date expression into a canonical calendar day.
//! - Keep the evaluation date injected so parsing stays deterministic.
//!
//! # Invariants
//! - Unrecognized input yields `None`, never a panic or error.
//! - A successful result formats as exactly `YYYY-MM-DD` and re-parses to
//!   itself.
//! - Calendar validity is decided by date construction, not range checks.

use chrono::{Datelike, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FULL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid full date regex"));
static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})$").expect("valid year-month regex"));
static MONTH_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})月$").expect("valid month marker regex"));
static MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[./](\d{1,2})$").expect("valid month-day regex"));

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parses a free-form date expression into a calendar day.
///
/// Accepted shapes, first match wins:
/// 1. `YYYY-MM-DD` — passthrough after calendar validation.
/// 2. `YYYY-M` / `YYYY-MM` — day 1 of that month.
/// 3. `M月` — day 1 of month `M` in `today`'s year.
/// 4. `M.D` / `M/D` — that month and day in `today`'s year.
///
/// Anything else returns `None`. A shape match with no real calendar day
/// behind it (`2023-02-30`) also returns `None`: construction fails and no
/// later pattern matches a dashed 3-part string.
pub fn parse_date_input(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    if let Some(caps) = FULL_DATE_RE.captures(input) {
        return NaiveDate::from_ymd_opt(
            capture_num(&caps, 1)?,
            capture_num(&caps, 2)?,
            capture_num(&caps, 3)?,
        );
    }

    if let Some(caps) = YEAR_MONTH_RE.captures(input) {
        return NaiveDate::from_ymd_opt(capture_num(&caps, 1)?, capture_num(&caps, 2)?, 1);
    }

    if let Some(caps) = MONTH_MARKER_RE.captures(input) {
        return NaiveDate::from_ymd_opt(today.year(), capture_num(&caps, 1)?, 1);
    }

    if let Some(caps) = MONTH_DAY_RE.captures(input) {
        return NaiveDate::from_ymd_opt(
            today.year(),
            capture_num(&caps, 1)?,
            capture_num(&caps, 2)?,
        );
    }

    None
}

/// Parses a date expression and renders it in canonical `YYYY-MM-DD` form.
///
/// Thin convenience over [`parse_date_input`] for callers that only need the
/// normalized string.
pub fn normalize_date_input(input: &str, today: NaiveDate) -> Option<String> {
    parse_date_input(input, today).map(|day| day.format("%Y-%m-%d").to_string())
}

/// Single-day filter for note listing.
///
/// Carries the calendar day plus its half-open UTC timestamp range
/// `[day 00:00, next day 00:00)` in epoch milliseconds, matching the
/// store's `created_at` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateQuery {
    day: NaiveDate,
}

impl DateQuery {
    /// Wraps an already-resolved calendar day.
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }

    /// Parses a free-form date expression into a day filter.
    pub fn parse(input: &str, today: NaiveDate) -> Option<Self> {
        parse_date_input(input, today).map(Self::new)
    }

    /// The filtered calendar day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Inclusive range start: midnight of the day, epoch milliseconds UTC.
    pub fn start_millis(&self) -> i64 {
        self.day.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// Exclusive range end: midnight of the following day.
    pub fn end_millis(&self) -> i64 {
        self.start_millis() + MILLIS_PER_DAY
    }
}

// Anchored `\d` groups are bounded, so parsing only fails for non-ASCII
// digit matches; those fall through to "no match" like any other input.
fn capture_num<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::DateQuery;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn date_query_range_is_half_open_over_one_day() {
        let query = DateQuery::new(day(2023, 6, 1));
        assert_eq!(query.end_millis() - query.start_millis(), 86_400_000);
        // 2023-06-01T00:00:00Z
        assert_eq!(query.start_millis(), 1_685_577_600_000);
    }

    #[test]
    fn date_query_parse_goes_through_the_input_parser() {
        let today = day(2024, 3, 15);
        let query = DateQuery::parse("6月", today).expect("month marker should parse");
        assert_eq!(query.day(), day(2024, 6, 1));
    }
}
