//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.
//! They provide semantic meaning and enable future type evolution.

/// Account ID - identifies an account within a registry.
///
/// # Constraints:
/// - **Immutable**: Once assigned, NEVER changes
/// - **Not deduplicated**: A registry may hold several accounts with the
///   same id; lookups resolve to the first match in insertion order
pub type AccountId = String;
