// ============================================================================
// Instant
// Absolute UTC point in time as epoch seconds + nanoseconds
// ============================================================================

use super::errors::{TemporalError, TemporalResult};
use super::span::Span;
use chrono::{NaiveDate, Utc};

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Earliest representable instant: 0001-01-01T00:00:00Z.
pub const MIN_INSTANT_SECONDS: i64 = -62_135_596_800;

/// Latest representable instant: 9999-12-31T23:59:59Z.
pub const MAX_INSTANT_SECONDS: i64 = 253_402_300_799;

/// An absolute UTC point in time.
///
/// Stored as seconds since the Unix epoch plus a nonnegative nanosecond
/// offset. A valid instant satisfies `0 <= nanos < 1_000_000_000` and keeps
/// `seconds` within the proleptic Gregorian years 0001-9999; construction is
/// unchecked and [`Instant::check_valid`] reports violations.
///
/// The derived ordering is lexicographic on `(seconds, nanos)`, which is the
/// chronological order for any value honoring the nanos invariant.
///
/// # Example
/// ```
/// use temporal_values::temporal::{Instant, Span};
///
/// let start = Instant::new(1_654_127_993, 983_651_350);
/// let later = start.add(Some(&Span::new(2, 100_000_000)));
/// assert_eq!(later.difference(&start), Span::new(2, 100_000_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    nanos: i32,
}

impl Instant {
    /// Create an instant from raw components without validation.
    #[inline]
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Seconds since the Unix epoch.
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond offset within the second.
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// The current wall-clock time.
    ///
    /// This is the only place the platform clock enters the crate.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos() as i32,
        }
    }

    /// Build an instant from UTC calendar fields.
    ///
    /// # Errors
    /// Returns `InvalidCalendarFields` when the fields do not name a real
    /// proleptic-Gregorian date/time, and `NanosOutOfRange` when `nanos` is
    /// not below one second.
    pub fn from_calendar_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanos: u32,
    ) -> TemporalResult<Self> {
        let invalid = TemporalError::InvalidCalendarFields {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid.clone())?;
        let time = date.and_hms_opt(hour, minute, second).ok_or(invalid)?;
        if nanos >= NANOS_PER_SECOND as u32 {
            return Err(TemporalError::NanosOutOfRange {
                nanos: nanos as i32,
            });
        }
        let instant = Self {
            seconds: time.and_utc().timestamp(),
            nanos: nanos as i32,
        };
        instant.check_valid()?;
        Ok(instant)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add a span, normalizing nanoseconds back into `[0, 1e9)`.
    ///
    /// An absent span is a no-op. The carry/borrow moves exactly one second:
    /// a negative nanosecond sum borrows, a sum of one second or more
    /// carries.
    pub fn add(&self, span: Option<&Span>) -> Instant {
        let Some(span) = span else {
            return *self;
        };
        let mut seconds = self.seconds.wrapping_add(span.seconds());
        let mut nanos = self.nanos + span.nanos();
        if nanos < 0 {
            nanos += NANOS_PER_SECOND;
            seconds = seconds.wrapping_sub(1);
        } else if nanos >= NANOS_PER_SECOND {
            nanos -= NANOS_PER_SECOND;
            seconds = seconds.wrapping_add(1);
        }
        Instant { seconds, nanos }
    }

    /// The signed elapsed span from `other` to `self`.
    ///
    /// Both operands must be present; the signature makes the precondition
    /// unrepresentable rather than checked. The result is renormalized so
    /// its seconds and nanoseconds agree in sign.
    pub fn difference(&self, other: &Instant) -> Span {
        let mut seconds = self.seconds.wrapping_sub(other.seconds);
        let mut nanos = self.nanos - other.nanos;
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
            nanos += NANOS_PER_SECOND;
        } else if seconds < 0 && nanos > 0 {
            seconds += 1;
            nanos -= NANOS_PER_SECOND;
        }
        Span::new(seconds, nanos)
    }

    /// Whether this instant is an exact whole multiple of `span` from the
    /// epoch, i.e. the exact start of some period of that length.
    ///
    /// Totals are computed in 128-bit arithmetic since the nanosecond count
    /// of an in-range instant exceeds 64 bits. A zero span divides nothing.
    pub fn is_whole_multiple(&self, span: &Span) -> bool {
        let total = self.seconds as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128;
        let unit = span.seconds() as i128 * NANOS_PER_SECOND as i128 + span.nanos() as i128;
        unit != 0 && total % unit == 0
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the range and nanosecond invariants.
    ///
    /// # Errors
    /// `BeforeRange`, `AfterRange` or `NanosOutOfRange`, carrying the
    /// offending field value.
    pub fn check_valid(&self) -> TemporalResult<()> {
        if self.seconds < MIN_INSTANT_SECONDS {
            return Err(TemporalError::BeforeRange {
                seconds: self.seconds,
            });
        }
        if self.seconds > MAX_INSTANT_SECONDS {
            return Err(TemporalError::AfterRange {
                seconds: self.seconds,
            });
        }
        if self.nanos < 0 || self.nanos >= NANOS_PER_SECOND {
            return Err(TemporalError::NanosOutOfRange { nanos: self.nanos });
        }
        Ok(())
    }

    /// Boolean form of [`Instant::check_valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.check_valid().is_ok()
    }

    /// Validate an optional instant, treating absence as its own failure.
    pub fn check_optional(value: Option<&Instant>) -> TemporalResult<()> {
        match value {
            None => Err(TemporalError::AbsentValue),
            Some(instant) => instant.check_valid(),
        }
    }
}
