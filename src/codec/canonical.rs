// ============================================================================
// Canonical Codec
// Fixed-layout ASCII interchange format for instants and spans
// ============================================================================
//
// Layout: the signed decimal seconds value immediately followed by the
// zero-padded 9-digit nanosecond field, e.g. seconds=1654127993 and
// nanos=983651350 encode as "1654127993983651350". Absence encodes as the
// empty string. All operations here are pure value-returning functions.

use crate::temporal::{Instant, Span, TemporalError, TemporalResult};

/// Width of the trailing nanosecond field.
const NANOS_FIELD_WIDTH: usize = 9;

/// Encode an optional instant into canonical form.
///
/// The instant must be valid: its nanoseconds are nonnegative, so the only
/// sign character is the one `seconds` may carry.
pub fn format_instant(instant: Option<&Instant>) -> String {
    match instant {
        None => String::new(),
        Some(instant) => format!("{}{:09}", instant.seconds(), instant.nanos()),
    }
}

/// Decode canonical text into an optional instant.
///
/// The empty string decodes to absence. Anything else must be at least ten
/// characters: a signed seconds field followed by exactly nine nanosecond
/// digits. The decoded instant is validated before being returned.
///
/// # Errors
/// `InputTooShort`, `InvalidSecondsField`, `InvalidNanosField`, or any
/// validation error from [`Instant::check_valid`].
pub fn parse_instant(text: &str) -> TemporalResult<Option<Instant>> {
    let Some((seconds, nanos)) = split_fields(text)? else {
        return Ok(None);
    };
    let instant = Instant::new(seconds, nanos as i32);
    instant.check_valid()?;
    Ok(Some(instant))
}

/// Encode an optional span into canonical form.
///
/// The sign of a span may live on either field, but the layout only has room
/// for a minus character in front of the seconds. Whenever either field is
/// negative the nanoseconds are emitted as their absolute value, leaving the
/// seconds' sign to carry the whole span.
///
/// A span with zero seconds and negative nanoseconds therefore encodes with
/// no sign at all and does not round-trip; `parse_span` returns its
/// positive mirror. Kept for compatibility with previously persisted values.
pub fn format_span(span: Option<&Span>) -> String {
    match span {
        None => String::new(),
        Some(span) => {
            let nanos = if span.is_negative() {
                span.nanos().unsigned_abs()
            } else {
                span.nanos() as u32
            };
            format!("{}{:09}", span.seconds(), nanos)
        },
    }
}

/// Decode canonical text into an optional span.
///
/// The digit layout is partitioned exactly as for instants; when the parsed
/// seconds are negative the nanosecond magnitude is negated to restore the
/// sign-consistency invariant. The decoded span is validated before being
/// returned.
///
/// # Errors
/// `InputTooShort`, `InvalidSecondsField`, `InvalidNanosField`, or any
/// validation error from [`Span::check_valid`].
pub fn parse_span(text: &str) -> TemporalResult<Option<Span>> {
    let Some((seconds, nanos)) = split_fields(text)? else {
        return Ok(None);
    };
    let nanos = if seconds < 0 {
        -(nanos as i32)
    } else {
        nanos as i32
    };
    let span = Span::new(seconds, nanos);
    span.check_valid()?;
    Ok(Some(span))
}

/// Partition canonical text into parsed (seconds, nanos) fields.
///
/// Returns `Ok(None)` for the empty string (absence).
fn split_fields(text: &str) -> TemporalResult<Option<(i64, i64)>> {
    if text.is_empty() {
        return Ok(None);
    }
    if text.len() <= NANOS_FIELD_WIDTH || !text.is_ascii() {
        tracing::debug!("rejecting canonical input of length {}", text.len());
        return Err(TemporalError::InputTooShort { length: text.len() });
    }
    let (seconds_field, nanos_field) = text.split_at(text.len() - NANOS_FIELD_WIDTH);
    let seconds: i64 =
        seconds_field
            .parse()
            .map_err(|_| TemporalError::InvalidSecondsField {
                field: seconds_field.to_string(),
            })?;
    let nanos: i64 = nanos_field
        .parse()
        .map_err(|_| TemporalError::InvalidNanosField {
            field: nanos_field.to_string(),
        })?;
    Ok(Some((seconds, nanos)))
}
