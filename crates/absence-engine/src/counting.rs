//! Absence-day counting over date windows.
//!
//! Each trip contributes its absence interval `[start + 1, end - 1]`; a
//! count over a window is the sum of each interval's intersection with that
//! window. Intervals from different trips are NOT merged first, so
//! overlapping trips count the same calendar day once per trip — this
//! matches the original Home Office calculator. [`count_absent_days_merged`]
//! is the deduplicating alternative for callers that treat overlaps as data
//! errors.

use chrono::NaiveDate;

use crate::trip::Trip;

/// Intersection of two closed date intervals, or `None` when disjoint.
fn overlap(
    a: (NaiveDate, NaiveDate),
    b: (NaiveDate, NaiveDate),
) -> Option<(NaiveDate, NaiveDate)> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    if start > end {
        return None;
    }
    Some((start, end))
}

/// Inclusive length of a closed date interval, in days.
fn interval_days((start, end): (NaiveDate, NaiveDate)) -> i64 {
    (end - start).num_days() + 1
}

/// Count full absence days within `[window_start, window_end]` inclusive.
///
/// An inverted window (`window_end < window_start`) counts as empty and
/// returns 0. Trips whose absence interval is empty contribute nothing.
/// Overlapping trips are summed independently and can double-count a day.
pub fn count_absent_days(
    trips: &[Trip],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> i64 {
    if window_end < window_start {
        return 0;
    }

    trips
        .iter()
        .filter_map(|trip| trip.absence_interval())
        .filter_map(|interval| overlap((window_start, window_end), interval))
        .map(interval_days)
        .sum()
}

/// Count full absence days within the window after merging all trips'
/// absence intervals into a disjoint set, so a day covered by several
/// overlapping trips counts once.
///
/// Always `<=` [`count_absent_days`] over the same inputs. The eligibility
/// checks use the summing variant for compatibility; this one exists for
/// callers that want overlap-proof totals.
pub fn count_absent_days_merged(
    trips: &[Trip],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> i64 {
    if window_end < window_start {
        return 0;
    }

    let mut intervals: Vec<(NaiveDate, NaiveDate)> = trips
        .iter()
        .filter_map(|trip| trip.absence_interval())
        .filter_map(|interval| overlap((window_start, window_end), interval))
        .collect();

    if intervals.is_empty() {
        return 0;
    }

    // Sort by start (then end for stability) and sweep. Adjacent-but-disjoint
    // intervals need no merging for an exact count, so only true overlaps
    // extend the current interval.
    intervals.sort();

    let mut total = 0;
    let mut current = intervals[0];
    for interval in intervals.into_iter().skip(1) {
        if interval.0 <= current.1 {
            current.1 = current.1.max(interval.1);
        } else {
            total += interval_days(current);
            current = interval;
        }
    }
    total + interval_days(current)
}

/// True iff `d` is a full absence day for some trip, i.e. falls within a
/// trip's `[start + 1, end - 1]` interval. Used for the physical-presence
/// test.
pub fn is_full_absence_day(trips: &[Trip], d: NaiveDate) -> bool {
    trips
        .iter()
        .filter_map(|trip| trip.absence_interval())
        .any(|(abs_start, abs_end)| abs_start <= d && d <= abs_end)
}
