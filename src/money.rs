//! Money Conversion Module
//!
//! Strict conversion between client-facing amount strings and
//! `rust_decimal::Decimal`. Amounts are held as `Decimal` everywhere in the
//! ledger; binary floating point never touches a balance.
//!
//! ## Design Principles
//! 1. Explicit Error Handling: no silent truncation, no lenient parsing
//! 2. Positive amounts only: zero and signed inputs are rejected at the
//!    boundary, matching the deposit/withdraw rules
//!
//! ## Usage
//! ```ignore
//! let amount = parse_amount("150.50", 2)?;
//! assert_eq!(format_amount(amount, 2), "150.50");
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Money conversion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Parse a client amount string into a `Decimal`.
///
/// # Arguments
/// * `amount_str` - client-provided amount (e.g. "150.50", "1000")
/// * `decimals` - maximum decimal places accepted
///
/// # Errors
/// * `PrecisionOverflow` - more decimal places than allowed
/// * `InvalidAmount` - zero or signed input
/// * `InvalidFormat` - anything that is not plain `digits[.digits]`
pub fn parse_amount(amount_str: &str, decimals: u32) -> Result<Decimal, MoneyError> {
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    // Signs are rejected outright: amounts are positive by contract
    if amount_str.starts_with('-') || amount_str.starts_with('+') {
        return Err(MoneyError::InvalidAmount);
    }

    let parts: Vec<&str> = amount_str.split('.').collect();
    let (whole, frac) = match parts.len() {
        1 => (parts[0], ""),
        2 => {
            // Strict: both sides of the dot must be non-empty.
            // This rejects ambiguous forms like ".5" or "5."
            if parts[0].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing leading zero (e.g., use 0.5 instead of .5)".into(),
                ));
            }
            if parts[1].is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
                ));
            }
            if decimals == 0 {
                return Err(MoneyError::InvalidFormat(
                    "decimals is 0, but dot provided".into(),
                ));
            }
            (parts[0], parts[1])
        }
        _ => return Err(MoneyError::InvalidFormat("multiple decimal points".into())),
    };

    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in whole part: {}",
            whole
        )));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in fractional part: {}",
            frac
        )));
    }

    // Precision validation: REJECT if too many decimals (no silent truncation!)
    if frac.len() > decimals as usize {
        return Err(MoneyError::PrecisionOverflow {
            provided: frac.len() as u32,
            max: decimals,
        });
    }

    let amount = Decimal::from_str(amount_str)
        .map_err(|e| MoneyError::InvalidFormat(e.to_string()))?;

    if amount.is_zero() {
        return Err(MoneyError::InvalidAmount);
    }

    Ok(amount)
}

/// Format an amount for display with a fixed number of decimal places.
pub fn format_amount(value: Decimal, display_decimals: u32) -> String {
    format!("{:.prec$}", value, prec = display_decimals as usize)
}
