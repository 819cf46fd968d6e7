// ============================================================================
// Calendar Module
// Period alignment over instants
// ============================================================================
//
// Granularities from second through year; month, quarter and year boundaries
// use real calendar arithmetic (variable month lengths, leap years) via
// chrono, never fixed day counts. Decomposition to calendar fields happens
// only at the chrono boundary.

mod align;

pub use align::{align_down, align_up, Granularity};
