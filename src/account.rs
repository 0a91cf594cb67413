//! ENFORCED ACCOUNT TYPE
//!
//! This is the SINGLE source of truth for balance operations.
//! ALL balance mutations MUST go through `deposit` / `withdraw`.
//!
//! # Enforcement Strategy:
//! 1. Fields are PRIVATE - no direct access
//! 2. All mutations return Result - errors are explicit
//! 3. Every check runs BEFORE the mutation - no mutation on failure
//! 4. checked arithmetic on the credit path - overflow protection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core_types::AccountId;
use crate::error::LedgerError;

/// Hard cap on a single withdrawal. Fixed rule, not configurable.
pub const MAX_WITHDRAWAL: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Minimum balance that must remain after any withdrawal.
/// Fixed rule, not configurable.
pub const MIN_BALANCE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// A bank account: identity plus a validated balance.
///
/// # Invariants (enforced by private fields):
/// - `balance >= 0` at all times after construction
/// - `id` and `holder_name` are immutable after creation
/// - balance changes only through `deposit` / `withdraw`, each validated
///   before the mutation is applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,         // PRIVATE - use id()
    holder_name: String,   // PRIVATE - use holder_name()
    balance: Decimal,      // PRIVATE - ONLY modified through deposit/withdraw
}

impl Account {
    /// Create an account with a non-negative opening balance.
    ///
    /// # Errors
    /// - `"Initial balance cannot be negative"` if `initial_balance < 0`
    pub fn new(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, LedgerError> {
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(
                "Initial balance cannot be negative",
            ));
        }
        Ok(Self {
            id: id.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
        })
    }

    #[inline(always)]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline(always)]
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Current balance (read-only)
    #[inline(always)]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit the account. No upper business bound.
    ///
    /// # Errors
    /// - `"Deposit amount must be positive"` if `amount <= 0`
    /// - `"Deposit overflow"` if the credit exceeds the representable range
    ///
    /// # Effects
    /// - Increases balance by `amount`; no mutation on failure
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(
                "Deposit amount must be positive",
            ));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidArgument("Deposit overflow"))?;
        Ok(())
    }

    /// Debit the account. Checks run in a FIXED order and short-circuit;
    /// the order decides which message the caller observes when several
    /// rules reject the same amount, so it is part of the contract:
    ///
    /// 1. `amount <= 0`                 -> `"Withdrawal amount must be positive"`
    /// 2. `amount > balance`            -> `"Insufficient balance"`
    /// 3. `amount > MAX_WITHDRAWAL`     -> `"Exceeds max withdrawal limit"`
    /// 4. `balance - amount < MIN_BALANCE` -> `"Below minimum balance"`
    ///
    /// # Effects
    /// - Decreases balance by `amount`; no mutation on failure
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(
                "Withdrawal amount must be positive",
            ));
        }
        if amount > self.balance {
            return Err(LedgerError::InvalidArgument("Insufficient balance"));
        }
        if amount > MAX_WITHDRAWAL {
            return Err(LedgerError::InvalidArgument("Exceeds max withdrawal limit"));
        }
        if self.balance - amount < MIN_BALANCE {
            return Err(LedgerError::InvalidArgument("Below minimum balance"));
        }
        self.balance -= amount;
        Ok(())
    }
}

// ============================================================
// TESTS - Prove enforcement works
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_new_rejects_negative_opening_balance() {
        let err = Account::new("ACC-1", "Alice", dec(-1)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidArgument("Initial balance cannot be negative")
        );
    }

    #[test]
    fn test_new_accepts_zero_and_positive_opening_balance() {
        let acc = Account::new("ACC-1", "Alice", Decimal::ZERO).unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);

        let acc = Account::new("ACC-2", "Bob", dec(1000)).unwrap();
        assert_eq!(acc.balance(), dec(1000));
        assert_eq!(acc.id(), "ACC-2");
        assert_eq!(acc.holder_name(), "Bob");
    }

    #[test]
    fn test_deposit() {
        let mut acc = Account::new("ACC-1", "Alice", dec(100)).unwrap();
        acc.deposit(dec(50)).unwrap();
        assert_eq!(acc.balance(), dec(150));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        let mut acc = Account::new("ACC-1", "Alice", dec(100)).unwrap();

        for amount in [Decimal::ZERO, dec(-5)] {
            let err = acc.deposit(amount).unwrap_err();
            assert_eq!(
                err,
                LedgerError::InvalidArgument("Deposit amount must be positive")
            );
            assert_eq!(acc.balance(), dec(100)); // Unchanged
        }
    }

    #[test]
    fn test_deposit_has_no_business_upper_bound() {
        let mut acc = Account::new("ACC-1", "Alice", dec(1000)).unwrap();
        acc.deposit(dec(15_000)).unwrap();
        assert_eq!(acc.balance(), dec(16_000));
    }

    #[test]
    fn test_deposit_overflow() {
        let mut acc = Account::new("ACC-1", "Alice", Decimal::MAX).unwrap();
        let err = acc.deposit(dec(1)).unwrap_err();
        assert_eq!(err, LedgerError::InvalidArgument("Deposit overflow"));
        assert_eq!(acc.balance(), Decimal::MAX); // Unchanged
    }

    #[test]
    fn test_withdraw() {
        let mut acc = Account::new("ACC-1", "Alice", dec(1000)).unwrap();
        acc.withdraw(dec(500)).unwrap();
        assert_eq!(acc.balance(), dec(500));
    }

    /// Table-driven sweep of the withdraw rules. One row per rejection rule
    /// plus the success rows, each pinning the exact message observed.
    #[test]
    fn test_withdraw_validation_table() {
        struct Case {
            name: &'static str,
            opening: i64,
            amount: i64,
            expect: Result<i64, &'static str>, // Ok(balance after) | Err(message)
        }

        let cases = [
            Case {
                name: "zero amount",
                opening: 1000,
                amount: 0,
                expect: Err("Withdrawal amount must be positive"),
            },
            Case {
                name: "negative amount",
                opening: 1000,
                amount: -100,
                expect: Err("Withdrawal amount must be positive"),
            },
            Case {
                name: "more than balance",
                opening: 500,
                amount: 600,
                expect: Err("Insufficient balance"),
            },
            Case {
                name: "over max limit",
                opening: 16_000,
                amount: 11_000,
                expect: Err("Exceeds max withdrawal limit"),
            },
            Case {
                name: "would break minimum floor",
                opening: 1000,
                amount: 960,
                expect: Err("Below minimum balance"),
            },
            Case {
                name: "plain success",
                opening: 1000,
                amount: 500,
                expect: Ok(500),
            },
            Case {
                name: "landing exactly on the floor is allowed",
                opening: 150,
                amount: 100,
                expect: Ok(50),
            },
        ];

        for case in cases {
            let mut acc = Account::new("ACC-1", "Alice", dec(case.opening)).unwrap();
            let result = acc.withdraw(dec(case.amount));
            match case.expect {
                Ok(after) => {
                    assert!(result.is_ok(), "{}: expected success", case.name);
                    assert_eq!(acc.balance(), dec(after), "{}", case.name);
                }
                Err(msg) => {
                    assert_eq!(
                        result.unwrap_err(),
                        LedgerError::InvalidArgument(msg),
                        "{}",
                        case.name
                    );
                    assert_eq!(acc.balance(), dec(case.opening), "{}: no mutation", case.name);
                }
            }
        }
    }

    /// Several rules can reject the same amount; the first failing check in
    /// the fixed order decides the message.
    #[test]
    fn test_withdraw_check_order_is_pinned() {
        // amount <= 0 wins over everything, even when balance is 0
        let mut acc = Account::new("ACC-1", "Alice", Decimal::ZERO).unwrap();
        assert_eq!(
            acc.withdraw(dec(-1)).unwrap_err().message(),
            "Withdrawal amount must be positive"
        );

        // insufficient balance wins over the max limit: 20000 > 10000 too,
        // but the balance check runs first
        let mut acc = Account::new("ACC-2", "Bob", dec(15_000)).unwrap();
        assert_eq!(
            acc.withdraw(dec(20_000)).unwrap_err().message(),
            "Insufficient balance"
        );

        // max limit wins over the minimum floor: 11000 from 11020 would also
        // land below 50, but the limit check runs first
        let mut acc = Account::new("ACC-3", "Carol", dec(11_020)).unwrap();
        assert_eq!(
            acc.withdraw(dec(11_000)).unwrap_err().message(),
            "Exceeds max withdrawal limit"
        );

        // draining a 1000 balance hits the floor before any limit concern:
        // 1000 - 1000 = 0 < 50 and 1000 <= 10000
        let mut acc = Account::new("ACC-4", "Dave", dec(1000)).unwrap();
        assert_eq!(
            acc.withdraw(dec(1000)).unwrap_err().message(),
            "Below minimum balance"
        );
    }

    #[test]
    fn test_withdraw_fractional_amounts_are_exact() {
        use std::str::FromStr;

        let mut acc = Account::new("ACC-1", "Alice", dec(1000)).unwrap();
        acc.withdraw(Decimal::from_str("0.10").unwrap()).unwrap();
        acc.withdraw(Decimal::from_str("0.20").unwrap()).unwrap();
        // Decimal arithmetic: no binary-float drift
        assert_eq!(acc.balance(), Decimal::from_str("999.70").unwrap());
    }
}
