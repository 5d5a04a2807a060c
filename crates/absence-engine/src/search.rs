//! Forward search for the earliest fully-eligible application date.

use chrono::{Months, NaiveDate};

use crate::check::{check_candidate_date, CandidateCheckResult, RuleLimits};
use crate::trip::Trip;

/// Default forward-search horizon, in calendar years.
pub const DEFAULT_SEARCH_YEARS: u32 = 10;

/// Scan forward day by day from `today` to `today + search_years` calendar
/// years inclusive, returning the first date on which all three eligibility
/// conditions hold, or `None` when the horizon is exhausted.
///
/// `None` is a legitimate outcome, not a failure: absences can permanently
/// exceed the caps within the horizon.
///
/// Eligibility is not monotonic in the candidate date — as the lookback
/// windows slide, future trips can both enter and leave them — so every day
/// is checked; no closed-form shortcut exists. The horizon caps the work at
/// `~365 * search_years` checks, each linear in the number of trips.
pub fn find_earliest_application_date(
    trips: &[Trip],
    today: NaiveDate,
    search_years: u32,
    limits: &RuleLimits,
) -> Option<CandidateCheckResult> {
    let max_date = today + Months::new(12 * search_years);

    today
        .iter_days()
        .take_while(|candidate| *candidate <= max_date)
        .map(|candidate| check_candidate_date(trips, candidate, limits))
        .find(|result| result.fully_eligible)
}
