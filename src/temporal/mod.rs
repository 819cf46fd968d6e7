// ============================================================================
// Temporal Module
// Instants, spans and the shared optional ordering
// ============================================================================
//
// This module provides:
// - Instant: absolute UTC point in time (epoch seconds + nanoseconds)
// - Span: signed calendar-independent duration
// - ordering: total order and extrema over optional values
// - TemporalError: validation/parsing/conversion error taxonomy
//
// Design principles:
// - Immutable value records; every operation returns a new value
// - No floating-point operations
// - Validation is explicit, never hidden inside constructors

mod errors;
mod instant;
pub mod ordering;
mod span;

pub use errors::{TemporalError, TemporalResult};
pub use instant::{Instant, MAX_INSTANT_SECONDS, MIN_INSTANT_SECONDS, NANOS_PER_SECOND};
pub use span::{Span, MAX_SPAN_SECONDS};
