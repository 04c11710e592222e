//! Error types shared by all kernels.
//!
//! Every fallible operation in the crate surfaces one of these variants
//! synchronously to its immediate caller. Nothing here aborts the process;
//! callers decide whether to report and continue.

use std::fmt;

/// Errors produced by the math kernel and the sort suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division with a zero divisor.
    DivisionByZero,

    /// Input outside the mathematical domain of the operation
    /// (negative input to `sqrt` or `factorial`).
    Domain(String),

    /// Input violating an algorithm precondition
    /// (negative element passed to counting or radix sort).
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::Domain(msg) => write!(f, "domain error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::Domain("negative input".to_string()).to_string(),
            "domain error: negative input"
        );
        assert_eq!(
            Error::InvalidInput("negative element".to_string()).to_string(),
            "invalid input: negative element"
        );
    }
}
