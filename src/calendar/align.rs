// ============================================================================
// Calendar Alignment
// Snapping instants down/up to period boundaries (second through year)
// ============================================================================

use crate::temporal::{Instant, TemporalError, TemporalResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc, Weekday};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_WEEK: i64 = 7;

/// A calendar period unit.
///
/// Sub-day granularities have a fixed length in seconds; week through year
/// require decomposing the instant into UTC calendar fields. Weeks start on
/// Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 8] = [
        Granularity::Second,
        Granularity::Minute,
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];
}

/// Snap an instant down to the latest period boundary at or before it.
///
/// # Errors
/// Propagates the validation error when `instant` is out of range.
pub fn align_down(instant: Instant, granularity: Granularity) -> TemporalResult<Instant> {
    instant.check_valid()?;
    match granularity {
        Granularity::Second => Ok(fixed_down(instant, 1)),
        Granularity::Minute => Ok(fixed_down(instant, SECONDS_PER_MINUTE)),
        Granularity::Hour => Ok(fixed_down(instant, SECONDS_PER_HOUR)),
        Granularity::Day => Ok(fixed_down(instant, SECONDS_PER_DAY)),
        Granularity::Week => {
            let day_start = fixed_down(instant, SECONDS_PER_DAY);
            let back = days_back_to_monday(decompose(instant).weekday());
            Ok(Instant::new(
                day_start.seconds() - back * SECONDS_PER_DAY,
                0,
            ))
        },
        Granularity::Month => {
            let fields = decompose(instant);
            period_start(fields.year(), fields.month())
        },
        Granularity::Quarter => {
            let fields = decompose(instant);
            period_start(fields.year(), quarter_start_month(fields.month()))
        },
        Granularity::Year => period_start(decompose(instant).year(), 1),
    }
}

/// Snap an instant up to the next period boundary.
///
/// Returns the instant unchanged (as a copy) when it already sits exactly on
/// a boundary, otherwise the smallest boundary strictly greater than it.
///
/// # Errors
/// Propagates the validation error when `instant` is out of range.
pub fn align_up(instant: Instant, granularity: Granularity) -> TemporalResult<Instant> {
    instant.check_valid()?;
    match granularity {
        Granularity::Second => Ok(fixed_up(instant, 1)),
        Granularity::Minute => Ok(fixed_up(instant, SECONDS_PER_MINUTE)),
        Granularity::Hour => Ok(fixed_up(instant, SECONDS_PER_HOUR)),
        Granularity::Day => Ok(fixed_up(instant, SECONDS_PER_DAY)),
        Granularity::Week => {
            let fields = decompose(instant);
            if fields.weekday() == Weekday::Mon && is_day_start(&fields, instant) {
                return Ok(instant);
            }
            let monday = align_down(instant, Granularity::Week)?;
            Ok(Instant::new(
                monday.seconds() + DAYS_PER_WEEK * SECONDS_PER_DAY,
                0,
            ))
        },
        Granularity::Month => {
            let fields = decompose(instant);
            if fields.day() == 1 && is_day_start(&fields, instant) {
                return Ok(instant);
            }
            let (year, month) = next_month(fields.year(), fields.month());
            period_start(year, month)
        },
        Granularity::Quarter => {
            let fields = decompose(instant);
            let month = fields.month();
            if fields.day() == 1
                && is_day_start(&fields, instant)
                && month == quarter_start_month(month)
            {
                return Ok(instant);
            }
            let start = quarter_start_month(month);
            if start + 3 > 12 {
                period_start(fields.year() + 1, 1)
            } else {
                period_start(fields.year(), start + 3)
            }
        },
        Granularity::Year => {
            let fields = decompose(instant);
            if fields.month() == 1 && fields.day() == 1 && is_day_start(&fields, instant) {
                return Ok(instant);
            }
            period_start(fields.year() + 1, 1)
        },
    }
}

// ============================================================================
// Fixed-length granularities
// ============================================================================

fn fixed_down(instant: Instant, unit: i64) -> Instant {
    Instant::new(instant.seconds().div_euclid(unit) * unit, 0)
}

fn fixed_up(instant: Instant, unit: i64) -> Instant {
    if instant.seconds().rem_euclid(unit) == 0 && instant.nanos() == 0 {
        instant
    } else {
        let down = fixed_down(instant, unit);
        Instant::new(down.seconds() + unit, 0)
    }
}

// ============================================================================
// Calendar-field granularities
// ============================================================================

/// Decompose a validated instant into UTC calendar fields.
fn decompose(instant: Instant) -> DateTime<Utc> {
    // The documented instant range (years 0001-9999) is strictly inside
    // chrono's representable range.
    DateTime::from_timestamp(instant.seconds(), instant.nanos() as u32)
        .expect("validated instant is within chrono's range")
}

fn is_day_start(fields: &DateTime<Utc>, instant: Instant) -> bool {
    fields.hour() == 0 && fields.minute() == 0 && fields.second() == 0 && instant.nanos() == 0
}

/// Days to walk back from a weekday to the week's Monday.
fn days_back_to_monday(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

/// First month of the quarter containing `month`.
fn quarter_start_month(month: u32) -> u32 {
    ((month - 1) / 3) * 3 + 1
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The first instant of the given month: day 1, 00:00:00 UTC.
fn period_start(year: i32, month: u32) -> TemporalResult<Instant> {
    let date =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(TemporalError::InvalidCalendarFields {
            year,
            month,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        })?;
    let seconds = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    Ok(Instant::new(seconds, 0))
}
