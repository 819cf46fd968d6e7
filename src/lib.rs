// ============================================================================
// Temporal Values Library
// Exact calendar-aware time math and lossless decimal representation
// ============================================================================

//! # Temporal Values
//!
//! Three numeric value types with exact, overflow-safe arithmetic:
//!
//! - **[`temporal::Instant`]** — an absolute UTC point in time
//!   (epoch seconds + nanoseconds, years 0001-9999)
//! - **[`temporal::Span`]** — a signed, calendar-independent duration
//!   bounded at ±10,000 years
//! - **[`decimal::DecimalValue`]** — an arbitrary-precision signed decimal
//!   chunked into base-10^18 limbs
//!
//! On top of the value algebra the crate provides:
//!
//! - a total order over *optional* values in which absence sorts below
//!   every present value ([`temporal::ordering`])
//! - calendar-period alignment from second through year, with Monday-start
//!   weeks and true variable month lengths ([`calendar`])
//! - the canonical ASCII interchange format shared by instants and spans
//!   ([`codec`])
//!
//! Everything is a pure, synchronous computation on immutable value records;
//! there is no I/O and no shared state, so every operation is safe to call
//! concurrently on independently owned values.
//!
//! ## Example
//!
//! ```rust
//! use temporal_values::prelude::*;
//!
//! let instant = Instant::new(1_654_127_993, 983_651_350);
//! assert_eq!(format_instant(Some(&instant)), "1654127993983651350");
//!
//! let monday = align_down(instant, Granularity::Week).unwrap();
//! assert!(monday <= instant);
//! assert!(monday.is_whole_multiple(&Span::new(86_400, 0)));
//!
//! let absent: Option<Instant> = None;
//! assert_eq!(ordering::max_of(Some(instant), absent, std::iter::empty()), Some(instant));
//! ```

pub mod calendar;
pub mod codec;
pub mod decimal;
pub mod temporal;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calendar::{align_down, align_up, Granularity};
    pub use crate::codec::{format_instant, format_span, parse_instant, parse_span};
    pub use crate::decimal::{DecimalError, DecimalResult, DecimalValue};
    pub use crate::temporal::{
        ordering, Instant, Span, TemporalError, TemporalResult, MAX_INSTANT_SECONDS,
        MAX_SPAN_SECONDS, MIN_INSTANT_SECONDS, NANOS_PER_SECOND,
    };
}
