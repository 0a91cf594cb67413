//! Ledger Error Types
//!
//! All validation failures in the ledger domain share a single error kind:
//! `InvalidArgument` with a fixed, caller-observable message. The message is
//! part of the contract - callers distinguish rejection causes by it.

use thiserror::Error;

/// Validation failure raised by `Account` operations.
///
/// Messages are `'static` because every rejection condition is a fixed rule
/// with a fixed wording; there is nothing dynamic to report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}

impl LedgerError {
    /// The raw message, without going through `Display`.
    pub const fn message(&self) -> &'static str {
        match self {
            LedgerError::InvalidArgument(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = LedgerError::InvalidArgument("Insufficient balance");
        assert_eq!(err.to_string(), "Insufficient balance");
        assert_eq!(err.message(), "Insufficient balance");
    }
}
