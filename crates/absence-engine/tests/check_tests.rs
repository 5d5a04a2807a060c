//! Tests for the single-date eligibility check: window placement, the
//! Guide AN presence-date example, cap boundaries, and leap-day candidates.

use absence_engine::{check_candidate_date, RuleLimits, Trip};
use chrono::NaiveDate;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn trip(start: NaiveDate, end: NaiveDate) -> Trip {
    Trip::new(start, end, "").unwrap()
}

#[test]
fn no_trips_means_fully_eligible() {
    let result = check_candidate_date(&[], d(2024, 5, 1), &RuleLimits::default());

    assert_eq!(result.candidate_date, d(2024, 5, 1));
    assert_eq!(result.days_12_months, 0);
    assert_eq!(result.days_5_years, 0);
    assert!(result.present_on_presence_date);
    assert!(result.meets_12m_rule);
    assert!(result.meets_5y_rule);
    assert!(result.fully_eligible);
}

#[test]
fn presence_date_matches_guide_an_example() {
    // Guide AN: application received 05/01/2022 requires presence on
    // 06/01/2017.
    let result = check_candidate_date(&[], d(2022, 1, 5), &RuleLimits::default());
    assert_eq!(result.presence_date_5y, d(2017, 1, 6));
}

#[test]
fn absence_on_presence_date_blocks_eligibility() {
    // Trip whose absence interval covers 2017-01-06, with counts well
    // within both caps — the presence test alone must fail the check.
    let trips = vec![trip(d(2017, 1, 1), d(2017, 1, 10))];
    let result = check_candidate_date(&trips, d(2022, 1, 5), &RuleLimits::default());

    assert!(!result.present_on_presence_date);
    assert!(result.meets_12m_rule);
    assert!(result.meets_5y_rule);
    assert!(!result.fully_eligible);
}

#[test]
fn presence_on_departure_day_passes_the_presence_test() {
    // Leaving on the test date itself still counts as present that day.
    let trips = vec![trip(d(2017, 1, 6), d(2017, 1, 20))];
    let result = check_candidate_date(&trips, d(2022, 1, 5), &RuleLimits::default());
    assert!(result.present_on_presence_date);
}

#[test]
fn twelve_month_window_ends_day_before_candidate() {
    // Absence interval Apr 2..=29 (28 days) sits inside the 12-month
    // window of a 2024-05-01 candidate; the same trip is outside the
    // 12-month window of a 2025-05-01 candidate but inside its 5-year one.
    let trips = vec![trip(d(2024, 4, 1), d(2024, 4, 30))];

    let near = check_candidate_date(&trips, d(2024, 5, 1), &RuleLimits::default());
    assert_eq!(near.days_12_months, 28);
    assert_eq!(near.days_5_years, 28);

    let far = check_candidate_date(&trips, d(2025, 5, 1), &RuleLimits::default());
    assert_eq!(far.days_12_months, 0);
    assert_eq!(far.days_5_years, 28);
}

#[test]
fn absence_day_on_candidate_date_is_outside_both_windows() {
    // Windows end the day before the candidate date, so an absence day on
    // the candidate date itself never counts.
    let trips = vec![trip(d(2024, 4, 30), d(2024, 5, 2))]; // interval: May 1
    let result = check_candidate_date(&trips, d(2024, 5, 1), &RuleLimits::default());
    assert_eq!(result.days_12_months, 0);
    assert_eq!(result.days_5_years, 0);
}

#[test]
fn exactly_ninety_days_meets_the_twelve_month_rule() {
    // Interval Jan 2..=Mar 31 2024 is exactly 90 days (30 + 29 + 31).
    let trips = vec![trip(d(2024, 1, 1), d(2024, 4, 1))];
    let result = check_candidate_date(&trips, d(2024, 5, 1), &RuleLimits::default());

    assert_eq!(result.days_12_months, 90);
    assert!(result.meets_12m_rule);
    assert!(result.fully_eligible);
}

#[test]
fn ninety_one_days_fails_the_twelve_month_rule() {
    let trips = vec![trip(d(2024, 1, 1), d(2024, 4, 2))]; // interval Jan 2..=Apr 1, 91 days
    let result = check_candidate_date(&trips, d(2024, 5, 1), &RuleLimits::default());

    assert_eq!(result.days_12_months, 91);
    assert!(!result.meets_12m_rule);
    assert!(result.meets_5y_rule);
    assert!(!result.fully_eligible);
}

#[test]
fn five_year_rule_fails_independently_of_twelve_month_rule() {
    // 460 absence days spread three years back: outside the 12-month
    // window, over the 5-year cap.
    let trips = vec![trip(d(2021, 1, 1), d(2022, 4, 7))]; // 460 interior days
    let result = check_candidate_date(&trips, d(2024, 5, 1), &RuleLimits::default());

    assert_eq!(result.days_12_months, 0);
    assert_eq!(result.days_5_years, 460);
    assert!(result.meets_12m_rule);
    assert!(!result.meets_5y_rule);
    assert!(!result.fully_eligible);
}

#[test]
fn custom_limits_are_honored() {
    let trips = vec![trip(d(2024, 1, 1), d(2024, 1, 12))]; // 10 days
    let strict = RuleLimits {
        max_12_month_absences: 5,
        max_5_year_absences: 450,
    };
    let result = check_candidate_date(&trips, d(2024, 5, 1), &strict);

    assert_eq!(result.days_12_months, 10);
    assert!(!result.meets_12m_rule);
    assert!(!result.fully_eligible);
}

#[test]
fn leap_day_candidate_uses_calendar_year_subtraction() {
    // 2024-02-29 minus one calendar year clamps to 2023-02-28; minus five
    // to 2019-02-28, putting the presence date on 2019-03-01.
    let result = check_candidate_date(&[], d(2024, 2, 29), &RuleLimits::default());
    assert_eq!(result.presence_date_5y, d(2019, 3, 1));

    // An absence interval starting exactly on the window start
    // (2023-02-28) counts in full.
    let trips = vec![trip(d(2023, 2, 27), d(2023, 3, 2))]; // interval Feb 28..=Mar 1
    let result = check_candidate_date(&trips, d(2024, 2, 29), &RuleLimits::default());
    assert_eq!(result.days_12_months, 2);
}

#[test]
fn default_limits_are_the_published_caps() {
    let limits = RuleLimits::default();
    assert_eq!(limits.max_12_month_absences, 90);
    assert_eq!(limits.max_5_year_absences, 450);
}

#[test]
fn result_serializes_for_downstream_consumers() {
    let result = check_candidate_date(&[], d(2022, 1, 5), &RuleLimits::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["candidate_date"], "2022-01-05");
    assert_eq!(json["presence_date_5y"], "2017-01-06");
    assert_eq!(json["fully_eligible"], true);
}
