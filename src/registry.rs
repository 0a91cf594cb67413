//! Account Registry
//!
//! Insertion-ordered collection of accounts, exclusively owning them.
//! The registry deliberately does NOT enforce id uniqueness: duplicate ids
//! may coexist and lookups resolve to the first match in insertion order.
//!
//! The [`AccountLookup`] trait is the boundary the transfer service depends
//! on, so it can be exercised against a fake without a full registry.

use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Resolution of account ids to accounts.
///
/// The only registry contract the core uses. `find` / `find_mut` return the
/// first match for the id, or `None` when no account carries it.
pub trait AccountLookup {
    fn find(&self, id: &str) -> Option<&Account>;
    fn find_mut(&mut self, id: &str) -> Option<&mut Account>;
}

/// Keyed collection of accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account. Duplicate ids are permitted - the registry does
    /// not deduplicate, and `find` resolves to the earliest insertion.
    pub fn add(&mut self, account: Account) {
        tracing::debug!(id = account.id(), "account registered");
        self.accounts.push(account);
    }

    /// Remove ALL accounts with the given id. Idempotent: removing an id
    /// that is not present is a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        self.accounts.retain(|acc| acc.id() != id);
    }

    /// Snapshot copy of the accounts in insertion order.
    /// Mutating the snapshot never affects the registry.
    pub fn list(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountLookup for AccountRegistry {
    fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id() == id)
    }
}
