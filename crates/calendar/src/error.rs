//! Error types for the snowrun-calendar crate.

/// Error type for all fallible operations in the snowrun-calendar crate.
///
/// This enum covers invalid month numbers and water years whose start
/// falls outside the range chrono can represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when the start of a water year cannot be represented.
    #[error("water year {water_year} is out of range")]
    WaterYearOutOfRange {
        /// The water year whose start instant overflowed.
        water_year: i32,
    },
}
