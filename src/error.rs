use thiserror::Error;

/// Errors returned when constructing an [`Interval`](crate::Interval).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The interval lower bound is strictly greater than the upper bound.
    ///
    /// The bounds are captured in their [`Debug`] representation.
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// The rejected lower bound.
        start: String,
        /// The rejected upper bound.
        end: String,
    },

    /// The hour and minute pair does not name a valid time of day.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime {
        /// The rejected hour.
        hour: u32,
        /// The rejected minute.
        minute: u32,
    },
}

/// A specialised [`Result`](std::result::Result) for interval construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;
