//! # absence-engine
//!
//! UK naturalisation absence rules as pure functions over a trip list.
//!
//! Given the dates a person left and returned to the UK, the engine counts
//! "full absence days" (whole days away, departure and return days
//! excluded), checks a candidate application date against the 90-day /
//! 12-month and 450-day / 5-year absence caps plus the fixed-date
//! physical-presence test, and scans forward for the earliest date on which
//! all three hold.
//!
//! The engine owns no I/O and holds no state: every call takes the trip
//! list and reference dates as values and returns an immutable result, so
//! concurrent callers need no coordination.
//!
//! ## Modules
//!
//! - [`trip`] — validated trip value object and the absence-day primitive
//! - [`counting`] — absence-day tallies over arbitrary date windows
//! - [`check`] — single-date eligibility check
//! - [`search`] — forward scan for the earliest eligible date
//! - [`error`] — error types

pub mod check;
pub mod counting;
pub mod error;
pub mod search;
pub mod trip;

pub use check::{
    check_candidate_date, CandidateCheckResult, RuleLimits, DEFAULT_MAX_12_MONTH_ABSENCES,
    DEFAULT_MAX_5_YEAR_ABSENCES,
};
pub use counting::{count_absent_days, count_absent_days_merged, is_full_absence_day};
pub use error::AbsenceError;
pub use search::{find_earliest_application_date, DEFAULT_SEARCH_YEARS};
pub use trip::{Trip, TripRecord};
