// ============================================================================
// Span
// Signed, calendar-independent elapsed duration
// ============================================================================

use super::errors::{TemporalError, TemporalResult};
use super::instant::NANOS_PER_SECOND;

/// Largest span magnitude in seconds (about 10,000 years).
pub const MAX_SPAN_SECONDS: i64 = 315_576_000_000;

/// A signed elapsed duration in seconds plus nanoseconds.
///
/// A valid span keeps `|nanos| < 1_000_000_000`, lets nonzero `seconds` and
/// `nanos` share a sign, and bounds the magnitude at ±10,000 years.
/// Construction is unchecked; [`Span::check_valid`] reports violations.
///
/// The derived ordering is lexicographic on `(seconds, nanos)`, which is the
/// numeric order for any sign-consistent span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    seconds: i64,
    nanos: i32,
}

impl Span {
    /// Create a span from raw components without validation.
    #[inline]
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Build a span from a total signed nanosecond count.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self {
            seconds: nanos / NANOS_PER_SECOND as i64,
            nanos: (nanos % NANOS_PER_SECOND as i64) as i32,
        }
    }

    /// Whole-second component.
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second component, sign-consistent with `seconds`.
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Whether both components are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Whether the span points backwards in time.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0 || self.nanos < 0
    }

    /// The span with both components negated.
    #[inline]
    pub const fn negated(&self) -> Span {
        Span {
            seconds: self.seconds.wrapping_neg(),
            nanos: self.nanos.wrapping_neg(),
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to a total signed 64-bit nanosecond count.
    ///
    /// # Errors
    /// - `SecondsMagnitudeTooLarge` when the seconds alone cannot be scaled
    ///   to nanoseconds in 64 bits (the logical result is zero).
    /// - `NativeRangeOverflow`/`NativeRangeUnderflow` when adding the
    ///   sub-second part pushes the total past `i64::MAX`/`i64::MIN`; the
    ///   error carries the saturated sentinel.
    pub fn to_native_duration(&self) -> TemporalResult<i64> {
        let scaled = self
            .seconds
            .checked_mul(NANOS_PER_SECOND as i64)
            .ok_or(TemporalError::SecondsMagnitudeTooLarge {
                seconds: self.seconds,
            })?;
        let total = scaled.wrapping_add(self.nanos as i64);
        if self.seconds < 0 && self.nanos < 0 && total > 0 {
            return Err(TemporalError::NativeRangeUnderflow {
                saturated: i64::MIN,
            });
        }
        if self.seconds > 0 && self.nanos > 0 && total < 0 {
            return Err(TemporalError::NativeRangeOverflow {
                saturated: i64::MAX,
            });
        }
        Ok(total)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the magnitude, nanosecond and sign-consistency invariants.
    ///
    /// # Errors
    /// `MagnitudeExceedsBound`, `NanosMagnitudeTooLarge` or `SignMismatch`,
    /// carrying the offending field values.
    pub fn check_valid(&self) -> TemporalResult<()> {
        if self.seconds.unsigned_abs() > MAX_SPAN_SECONDS as u64 {
            return Err(TemporalError::MagnitudeExceedsBound {
                seconds: self.seconds,
            });
        }
        if self.nanos.unsigned_abs() >= NANOS_PER_SECOND as u32 {
            return Err(TemporalError::NanosMagnitudeTooLarge { nanos: self.nanos });
        }
        if (self.seconds > 0 && self.nanos < 0) || (self.seconds < 0 && self.nanos > 0) {
            return Err(TemporalError::SignMismatch {
                seconds: self.seconds,
                nanos: self.nanos,
            });
        }
        Ok(())
    }

    /// Boolean form of [`Span::check_valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.check_valid().is_ok()
    }

    /// Validate an optional span, treating absence as its own failure.
    pub fn check_optional(value: Option<&Span>) -> TemporalResult<()> {
        match value {
            None => Err(TemporalError::AbsentValue),
            Some(span) => span.check_valid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nanos() {
        assert_eq!(Span::from_nanos(1_500_000_000), Span::new(1, 500_000_000));
        assert_eq!(Span::from_nanos(-1_500_000_000), Span::new(-1, -500_000_000));
        assert_eq!(Span::from_nanos(-5), Span::new(0, -5));
        assert_eq!(Span::from_nanos(0), Span::new(0, 0));
    }

    #[test]
    fn test_helpers() {
        assert!(Span::new(0, 0).is_zero());
        assert!(Span::new(0, -1).is_negative());
        assert!(Span::new(-1, 0).is_negative());
        assert!(!Span::new(1, 0).is_negative());
        assert_eq!(Span::new(3, 500).negated(), Span::new(-3, -500));
    }

    #[test]
    fn test_check_valid() {
        assert!(Span::new(MAX_SPAN_SECONDS, 999_999_999).is_valid());
        assert!(Span::new(-MAX_SPAN_SECONDS, -999_999_999).is_valid());
        assert!(Span::new(0, -5).is_valid());

        assert_eq!(
            Span::new(MAX_SPAN_SECONDS + 1, 0).check_valid(),
            Err(TemporalError::MagnitudeExceedsBound {
                seconds: MAX_SPAN_SECONDS + 1
            })
        );
        assert_eq!(
            Span::new(0, 1_000_000_000).check_valid(),
            Err(TemporalError::NanosMagnitudeTooLarge {
                nanos: 1_000_000_000
            })
        );
        assert_eq!(
            Span::new(5, -3).check_valid(),
            Err(TemporalError::SignMismatch {
                seconds: 5,
                nanos: -3
            })
        );
        assert_eq!(
            Span::new(-5, 3).check_valid(),
            Err(TemporalError::SignMismatch {
                seconds: -5,
                nanos: 3
            })
        );
    }

    #[test]
    fn test_check_optional() {
        assert_eq!(Span::check_optional(None), Err(TemporalError::AbsentValue));
        assert_eq!(Span::check_optional(Some(&Span::new(1, 1))), Ok(()));
    }

    #[test]
    fn test_to_native_duration() {
        assert_eq!(
            Span::new(1, 500_000_000).to_native_duration(),
            Ok(1_500_000_000)
        );
        assert_eq!(
            Span::new(-1, -500_000_000).to_native_duration(),
            Ok(-1_500_000_000)
        );
    }

    #[test]
    fn test_to_native_duration_seconds_too_large() {
        assert_eq!(
            Span::new(1 << 60, 0).to_native_duration(),
            Err(TemporalError::SecondsMagnitudeTooLarge { seconds: 1 << 60 })
        );
    }

    #[test]
    fn test_to_native_duration_saturation() {
        // 9_223_372_036 * 1e9 fits; the nanos push it past i64::MAX
        assert_eq!(
            Span::new(9_223_372_036, 999_999_999).to_native_duration(),
            Err(TemporalError::NativeRangeOverflow {
                saturated: i64::MAX
            })
        );
        assert_eq!(
            Span::new(-9_223_372_036, -999_999_999).to_native_duration(),
            Err(TemporalError::NativeRangeUnderflow {
                saturated: i64::MIN
            })
        );
        // Just inside the representable range
        assert_eq!(
            Span::new(9_223_372_036, 854_775_807).to_native_duration(),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Span::new(-1, 0) < Span::new(0, -5));
        assert!(Span::new(0, -5) < Span::new(0, 0));
        assert!(Span::new(0, 0) < Span::new(0, 5));
        assert!(Span::new(1, 999_999_999) < Span::new(2, 0));
    }
}
