//! Error types for absence-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbsenceError {
    /// A trip was constructed with a return date before its departure date.
    /// This is an input error; no partial trip is produced.
    #[error("trip end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Convenience alias used throughout absence-engine.
pub type Result<T> = std::result::Result<T, AbsenceError>;
