// ============================================================================
// Temporal Errors
// Error types for instant/span validation, parsing and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while validating, parsing or converting temporal
/// values.
///
/// Every variant carries the offending raw field values so callers can report
/// exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalError {
    /// The value is absent where a present value is required
    AbsentValue,
    /// Instant seconds below the minimum representable calendar year (0001)
    BeforeRange { seconds: i64 },
    /// Instant seconds above the maximum representable calendar year (9999)
    AfterRange { seconds: i64 },
    /// Instant nanoseconds outside `[0, 1_000_000_000)`
    NanosOutOfRange { nanos: i32 },
    /// Span seconds beyond the ±10,000 year bound
    MagnitudeExceedsBound { seconds: i64 },
    /// Span nanoseconds with magnitude `>= 1_000_000_000`
    NanosMagnitudeTooLarge { nanos: i32 },
    /// Span seconds and nanoseconds carry opposite nonzero signs
    SignMismatch { seconds: i64, nanos: i32 },
    /// Canonical input shorter than the minimum seconds + nanos layout
    InputTooShort { length: usize },
    /// The seconds portion of canonical input did not parse as an integer
    InvalidSecondsField { field: String },
    /// The nanoseconds portion of canonical input did not parse as an integer
    InvalidNanosField { field: String },
    /// Calendar fields do not name a real proleptic-Gregorian date/time
    InvalidCalendarFields {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// Span seconds too large to express as nanoseconds in 64 bits
    /// (the logical conversion result is zero)
    SecondsMagnitudeTooLarge { seconds: i64 },
    /// Nanosecond total above `i64::MAX`; `saturated` is the clamped result
    NativeRangeOverflow { saturated: i64 },
    /// Nanosecond total below `i64::MIN`; `saturated` is the clamped result
    NativeRangeUnderflow { saturated: i64 },
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalError::AbsentValue => write!(f, "value is absent"),
            TemporalError::BeforeRange { seconds } => {
                write!(f, "instant seconds {} precede year 0001", seconds)
            },
            TemporalError::AfterRange { seconds } => {
                write!(f, "instant seconds {} exceed year 9999", seconds)
            },
            TemporalError::NanosOutOfRange { nanos } => {
                write!(f, "instant nanoseconds {} outside [0, 1e9)", nanos)
            },
            TemporalError::MagnitudeExceedsBound { seconds } => {
                write!(f, "span seconds {} exceed the ±10,000 year bound", seconds)
            },
            TemporalError::NanosMagnitudeTooLarge { nanos } => {
                write!(f, "span nanoseconds {} have magnitude >= 1e9", nanos)
            },
            TemporalError::SignMismatch { seconds, nanos } => write!(
                f,
                "span seconds {} and nanoseconds {} disagree in sign",
                seconds, nanos
            ),
            TemporalError::InputTooShort { length } => write!(
                f,
                "canonical input of length {} is shorter than the 10-character minimum",
                length
            ),
            TemporalError::InvalidSecondsField { field } => {
                write!(f, "seconds field {:?} is not a valid integer", field)
            },
            TemporalError::InvalidNanosField { field } => {
                write!(f, "nanoseconds field {:?} is not a valid integer", field)
            },
            TemporalError::InvalidCalendarFields {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => write!(
                f,
                "calendar fields {:04}-{:02}-{:02} {:02}:{:02}:{:02} do not name a valid UTC date/time",
                year, month, day, hour, minute, second
            ),
            TemporalError::SecondsMagnitudeTooLarge { seconds } => write!(
                f,
                "span seconds {} cannot be expressed as 64-bit nanoseconds",
                seconds
            ),
            TemporalError::NativeRangeOverflow { saturated } => write!(
                f,
                "nanosecond total overflows i64, saturated to {}",
                saturated
            ),
            TemporalError::NativeRangeUnderflow { saturated } => write!(
                f,
                "nanosecond total underflows i64, saturated to {}",
                saturated
            ),
        }
    }
}

impl std::error::Error for TemporalError {}

/// Result type alias for temporal operations
pub type TemporalResult<T> = Result<T, TemporalError>;
