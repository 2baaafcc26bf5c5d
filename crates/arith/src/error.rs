//! Error types for the kairos-arith crate.

/// Error type for instant and interval construction.
///
/// Only validating constructors return these. The arithmetic operations
/// themselves are total: they accept whatever well-formed values they are
/// given and never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i64,
        /// The month for which the day is invalid.
        month: i64,
        /// The maximum valid day for the given month.
        max_day: i64,
    },

    /// Returned when an hour is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: i64,
    },

    /// Returned when a minute is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute that was provided.
        minute: i64,
    },

    /// Returned when a second is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second that was provided.
        second: i64,
    },

    /// Returned when a microsecond is outside the valid range 0..=999999.
    #[error("invalid microsecond: {microsecond} (must be 0..=999999)")]
    InvalidMicrosecond {
        /// The invalid microsecond that was provided.
        microsecond: i64,
    },

    /// Returned when an interval component is negative; direction belongs
    /// to the invert flag, not to the components.
    #[error("negative interval component {field}: {value} (use the invert flag for direction)")]
    NegativeComponent {
        /// Name of the offending component.
        field: &'static str,
        /// The negative value that was provided.
        value: i64,
    },
}
