//! bank_ledger - A minimal bank ledger
//!
//! Accounts holding a validated balance, a registry of accounts, and a
//! transfer operation composing withdraw/deposit across two accounts.
//!
//! # Modules
//!
//! - [`core_types`] - Core type definitions (AccountId)
//! - [`error`] - The single validation-failure error kind
//! - [`money`] - Strict amount parsing/formatting over `Decimal`
//! - [`account`] - Account entity with enforced balance invariants
//! - [`registry`] - Insertion-ordered account registry and the lookup seam
//! - [`transfer`] - Transfer service composing withdraw then deposit
//! - [`config`] - YAML application configuration
//! - [`logging`] - Tracing subscriber setup

// Core types - must be first!
pub mod core_types;

// Ledger components
pub mod account;
pub mod error;
pub mod money;
pub mod registry;
pub mod transfer;

// Application plumbing
pub mod config;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, MAX_WITHDRAWAL, MIN_BALANCE};
pub use config::AppConfig;
pub use core_types::AccountId;
pub use error::LedgerError;
pub use money::{MoneyError, format_amount, parse_amount};
pub use registry::{AccountLookup, AccountRegistry};
pub use transfer::{TransferFailure, TransferService};
