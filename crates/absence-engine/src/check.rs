//! Single-date eligibility check against the naturalisation absence rules.
//!
//! Three conditions must hold for a candidate application date:
//!
//! 1. At most 90 full absence days in the 12 months before it.
//! 2. At most 450 full absence days in the 5 years before it.
//! 3. Physical presence in the UK on the date exactly "5 years minus one
//!    day" before it. Guide AN's example: an application received on
//!    2022-01-05 requires presence on 2017-01-06.
//!
//! Both lookback windows end the day before the candidate date and use
//! calendar-accurate year subtraction (a Feb 29 candidate looks back to
//! Feb 28).

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::counting::{count_absent_days, is_full_absence_day};
use crate::trip::Trip;

/// Default cap on absence days in the 12 months before application.
pub const DEFAULT_MAX_12_MONTH_ABSENCES: i64 = 90;

/// Default cap on absence days in the 5 years before application.
pub const DEFAULT_MAX_5_YEAR_ABSENCES: i64 = 450;

/// Absence caps for the two lookback windows. Per-call configuration, not
/// global state; `Default` gives the published Home Office limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleLimits {
    pub max_12_month_absences: i64,
    pub max_5_year_absences: i64,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_12_month_absences: DEFAULT_MAX_12_MONTH_ABSENCES,
            max_5_year_absences: DEFAULT_MAX_5_YEAR_ABSENCES,
        }
    }
}

/// Outcome of checking one candidate application date. Immutable; the
/// boolean fields are derived from the counts and the limits in force at
/// check time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCheckResult {
    /// The application date that was evaluated.
    pub candidate_date: NaiveDate,
    /// Full absence days in `[candidate - 12 months, candidate - 1 day]`.
    pub days_12_months: i64,
    /// Full absence days in `[candidate - 5 years, candidate - 1 day]`.
    pub days_5_years: i64,
    /// The fixed physical-presence test date, `candidate - 5 years + 1 day`.
    pub presence_date_5y: NaiveDate,
    /// Whether the person was in the UK on `presence_date_5y`.
    pub present_on_presence_date: bool,
    /// `days_12_months` within the 12-month cap.
    pub meets_12m_rule: bool,
    /// `days_5_years` within the 5-year cap.
    pub meets_5y_rule: bool,
    /// All three conditions hold.
    pub fully_eligible: bool,
}

/// Evaluate the three eligibility conditions for one candidate date.
///
/// Pure function of its inputs; validated trips make it total. Dates within
/// five years of `NaiveDate::MIN` are out of contract (chrono's calendar
/// arithmetic panics on underflow).
pub fn check_candidate_date(
    trips: &[Trip],
    candidate_date: NaiveDate,
    limits: &RuleLimits,
) -> CandidateCheckResult {
    let window_end = candidate_date - Days::new(1);

    // 12-month window: [candidate - 1y, candidate - 1 day]
    let start_12m = candidate_date - Months::new(12);
    // 5-year window: [candidate - 5y, candidate - 1 day]
    let start_5y = candidate_date - Months::new(60);

    let days_12_months = count_absent_days(trips, start_12m, window_end);
    let days_5_years = count_absent_days(trips, start_5y, window_end);

    let presence_date_5y = start_5y + Days::new(1);
    let present_on_presence_date = !is_full_absence_day(trips, presence_date_5y);

    let meets_12m_rule = days_12_months <= limits.max_12_month_absences;
    let meets_5y_rule = days_5_years <= limits.max_5_year_absences;

    CandidateCheckResult {
        candidate_date,
        days_12_months,
        days_5_years,
        presence_date_5y,
        present_on_presence_date,
        meets_12m_rule,
        meets_5y_rule,
        fully_eligible: meets_12m_rule && meets_5y_rule && present_on_presence_date,
    }
}
