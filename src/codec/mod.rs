// ============================================================================
// Codec Module
// Canonical ASCII interchange format
// ============================================================================
//
// The canonical string is the sole interchange form: signed seconds followed
// by a zero-padded 9-digit nanosecond field, with the empty string standing
// for absence. External adapters (JSON, CSV, database parameters) read and
// write this text; the optional serde support wires it up directly.

pub mod canonical;
#[cfg(feature = "serde")]
mod serde_support;

pub use canonical::{format_instant, format_span, parse_instant, parse_span};
