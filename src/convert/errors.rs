/// Errors from the conversion layer.
use thiserror::Error;

/// Errors that can occur while converting a decimal token to grouped binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The token is not a base-10 integer literal.
    #[error("'{input}' is not a valid decimal integer")]
    InvalidNumberFormat {
        /// The offending token.
        input: String,
    },

    /// The token is a negative integer, which has no unsigned binary form.
    #[error("'{input}' is negative; only non-negative integers can be converted")]
    UnsupportedNegativeValue {
        /// The offending token.
        input: String,
    },

    /// A group size of zero would never reach a group boundary.
    #[error("Group size must be at least 1 (got {size})")]
    InvalidGroupSize {
        /// The rejected size.
        size: usize,
    },
}
