// ============================================================================
// Decimal Module
// Chunked arbitrary-precision decimal codec
// ============================================================================
//
// This module provides:
// - DecimalValue: base-10^18 limb sequence plus exponent
// - DecimalError: codec error types
//
// Design principles:
// - Fixed-width integers in the steady state, bignum only at the boundary
// - No floating-point operations
// - Text parsing is pure: it returns a new value, never mutates a receiver

mod chunked;
mod errors;

pub use chunked::{DecimalValue, DIGITS_PER_LIMB, LIMB_BASE};
pub use errors::{DecimalError, DecimalResult};
