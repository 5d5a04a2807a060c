//! Trip value object and the full-absence-day primitive.
//!
//! A trip records the day the person left the UK and the day they returned.
//! Under Home Office guidance only whole days away count as absences, so the
//! departure and return days themselves are excluded: a trip's absence
//! interval is `[start + 1, end - 1]`, which is empty for day trips and
//! overnight trips.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AbsenceError, Result};

/// A validated trip outside the UK. Immutable once constructed; `end` is
/// guaranteed to be on or after `start`.
///
/// Serialization goes through [`TripRecord`] (the persisted row shape), so
/// deserializing an inverted range fails rather than producing an invalid
/// trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TripRecord", into = "TripRecord")]
pub struct Trip {
    start: NaiveDate,
    end: NaiveDate,
    note: String,
}

impl Trip {
    /// Construct a trip, rejecting `end < start` with
    /// [`AbsenceError::InvalidRange`].
    pub fn new(start: NaiveDate, end: NaiveDate, note: impl Into<String>) -> Result<Self> {
        if end < start {
            return Err(AbsenceError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            note: note.into(),
        })
    }

    /// The day the person left the UK.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The day the person returned to the UK.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Free-text label; carries no meaning for the engine.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// The closed interval `[start + 1, end - 1]` of full absence days, or
    /// `None` when the trip spans one night or less and no full day was
    /// spent away.
    pub fn absence_interval(&self) -> Option<(NaiveDate, NaiveDate)> {
        let abs_start = self.start.checked_add_days(Days::new(1))?;
        let abs_end = self.end.checked_sub_days(Days::new(1))?;
        if abs_end < abs_start {
            return None;
        }
        Some((abs_start, abs_end))
    }

    /// Number of full absence days for this trip, i.e. the size of
    /// [`absence_interval`](Self::absence_interval).
    ///
    /// Equivalent to `max(0, (end - start) - 1)` in days.
    pub fn full_absence_days(&self) -> i64 {
        match self.absence_interval() {
            Some((abs_start, abs_end)) => (abs_end - abs_start).num_days() + 1,
            None => 0,
        }
    }
}

/// The persisted/wire shape of a trip: ISO-8601 `start_date` / `end_date`
/// and an optional note. Storage and UI collaborators speak this shape; the
/// engine validates it into a [`Trip`] at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TryFrom<TripRecord> for Trip {
    type Error = AbsenceError;

    fn try_from(record: TripRecord) -> Result<Self> {
        let note = record.note.map(|n| n.trim().to_string()).unwrap_or_default();
        Trip::new(record.start_date, record.end_date, note)
    }
}

impl From<Trip> for TripRecord {
    fn from(trip: Trip) -> Self {
        TripRecord {
            start_date: trip.start,
            end_date: trip.end,
            note: (!trip.note.is_empty()).then_some(trip.note),
        }
    }
}
