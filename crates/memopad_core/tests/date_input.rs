use chrono::NaiveDate;
use memopad_core::{normalize_date_input, parse_date_input};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

// 2024 is a leap year, which the month-day tests rely on.
fn today() -> NaiveDate {
    date(2024, 3, 15)
}

#[test]
fn full_iso_date_passes_through() {
    assert_eq!(
        parse_date_input("2023-05-20", today()),
        Some(date(2023, 5, 20))
    );
    assert_eq!(
        normalize_date_input("2023-05-20", today()).as_deref(),
        Some("2023-05-20")
    );
}

#[test]
fn year_month_resolves_to_first_of_month() {
    assert_eq!(
        normalize_date_input("2023-06", today()).as_deref(),
        Some("2023-06-01")
    );
    assert_eq!(
        normalize_date_input("2023-6", today()).as_deref(),
        Some("2023-06-01")
    );
    assert_eq!(
        normalize_date_input("2023-12", today()).as_deref(),
        Some("2023-12-01")
    );
}

#[test]
fn month_marker_uses_current_year() {
    assert_eq!(
        normalize_date_input("6月", today()).as_deref(),
        Some("2024-06-01")
    );
    assert_eq!(
        normalize_date_input("12月", today()).as_deref(),
        Some("2024-12-01")
    );
    // A different evaluation year moves the result.
    assert_eq!(
        normalize_date_input("6月", date(2019, 11, 2)).as_deref(),
        Some("2019-06-01")
    );
}

#[test]
fn month_day_uses_current_year_with_both_separators() {
    assert_eq!(
        normalize_date_input("6.1", today()).as_deref(),
        Some("2024-06-01")
    );
    assert_eq!(
        normalize_date_input("6/1", today()).as_deref(),
        Some("2024-06-01")
    );
    assert_eq!(
        normalize_date_input("12.31", today()).as_deref(),
        Some("2024-12-31")
    );
}

#[test]
fn month_day_validity_depends_on_the_evaluation_year() {
    // Leap day exists in 2024 but not in 2023.
    assert_eq!(
        normalize_date_input("2.29", today()).as_deref(),
        Some("2024-02-29")
    );
    assert_eq!(parse_date_input("2.29", date(2023, 3, 15)), None);
}

#[test]
fn unrecognized_input_yields_no_match() {
    let today = today();
    assert_eq!(parse_date_input("", today), None);
    assert_eq!(parse_date_input(" ", today), None);
    assert_eq!(parse_date_input("invalid", today), None);
    assert_eq!(parse_date_input("tomorrow", today), None);
    assert_eq!(parse_date_input("2023/05/20", today), None);
    // Anchored patterns: surrounding whitespace disqualifies the input.
    assert_eq!(parse_date_input(" 2023-05-20", today), None);
    assert_eq!(parse_date_input("2023-05-20 ", today), None);
}

#[test]
fn invalid_calendar_dates_are_rejected_despite_matching_shape() {
    let today = today();
    assert_eq!(parse_date_input("2023-02-30", today), None);
    assert_eq!(parse_date_input("2023-13-01", today), None);
    assert_eq!(parse_date_input("2023-00-10", today), None);
    assert_eq!(parse_date_input("0月", today), None);
    assert_eq!(parse_date_input("13月", today), None);
    assert_eq!(parse_date_input("6.31", today), None);
    assert_eq!(parse_date_input("13.1", today), None);
    assert_eq!(parse_date_input("0.0", today), None);
}

#[test]
fn single_digit_components_in_dashed_full_dates_do_not_match() {
    // The full-date rule requires two-digit month and day, and no other
    // rule matches a dashed 3-part string.
    let today = today();
    assert_eq!(parse_date_input("2023-5-20", today), None);
    assert_eq!(parse_date_input("2023-05-2", today), None);
}

#[test]
fn year_month_with_invalid_month_is_rejected() {
    let today = today();
    assert_eq!(parse_date_input("2023-13", today), None);
    assert_eq!(parse_date_input("2023-0", today), None);
}

#[test]
fn successful_results_are_canonical_and_idempotent() {
    let today = today();
    for input in ["2023-05-20", "2023-06", "2023-6", "6月", "6.1", "6/1", "12.31"] {
        let canonical = normalize_date_input(input, today)
            .unwrap_or_else(|| panic!("`{input}` should parse"));
        assert_eq!(canonical.len(), 10, "`{canonical}` should be 10 chars");
        assert_eq!(
            normalize_date_input(&canonical, today).as_deref(),
            Some(canonical.as_str()),
            "canonical form `{canonical}` should re-parse to itself"
        );
    }
}
