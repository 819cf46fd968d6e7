// ============================================================================
// Decimal Errors
// Error types for chunked decimal codec operations
// ============================================================================

use std::fmt;

/// Errors that can occur while converting chunked decimals to or from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text is not a valid decimal number
    ParseFailure { text: String },
    /// The decimal's exponent does not fit the 32-bit exponent field
    ExponentOutOfRange { exponent: i64 },
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::ParseFailure { text } => {
                write!(f, "could not parse {:?} as a decimal number", text)
            },
            DecimalError::ExponentOutOfRange { exponent } => {
                write!(f, "exponent {} does not fit in 32 bits", exponent)
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal codec operations
pub type DecimalResult<T> = Result<T, DecimalError>;
