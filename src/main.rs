//! bank_ledger demo entry point
//!
//! Wires config + logging and drives a small scenario through the library:
//! seed a registry, run a successful transfer and a rejected one, and log
//! the resulting balances. Not a CLI - the only input is an optional
//! config environment name (defaults to `dev`).

use anyhow::{Context, Result};
use tracing::{info, warn};

use bank_ledger::config::AppConfig;
use bank_ledger::logging::init_logging;
use bank_ledger::money::{format_amount, parse_amount};
use bank_ledger::registry::AccountRegistry;
use bank_ledger::transfer::TransferService;
use bank_ledger::Account;

fn main() -> Result<()> {
    let env = std::env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    let mut registry = AccountRegistry::new();
    for (id, holder, opening) in [
        ("ACC-1001", "Alice", "1000.00"),
        ("ACC-1002", "Bob", "500.00"),
        ("ACC-1003", "Carol", "75.00"),
    ] {
        let opening = parse_amount(opening, 2)
            .with_context(|| format!("invalid opening balance for {}", id))?;
        let account = Account::new(id, holder, opening)
            .map_err(|e| anyhow::anyhow!("{}: {}", id, e))?;
        registry.add(account);
    }
    info!(accounts = registry.len(), "registry seeded");

    let mut service = TransferService::new(registry);

    let amount = parse_amount("200.00", 2).context("invalid transfer amount")?;
    if service.transfer("ACC-1001", "ACC-1002", amount) {
        info!(from = "ACC-1001", to = "ACC-1002", %amount, "transfer committed");
    }

    // Rejected: 75 - 40 = 35 lands below the minimum balance floor
    let amount = parse_amount("40.00", 2).context("invalid transfer amount")?;
    match service.try_transfer("ACC-1003", "ACC-1001", amount) {
        Ok(()) => info!("unexpected commit"),
        Err(failure) => warn!(%failure, "transfer rejected as expected"),
    }

    for account in service.accounts().list() {
        info!(
            id = account.id(),
            holder = account.holder_name(),
            balance = %format_amount(account.balance(), 2),
            "final balance"
        );
    }

    Ok(())
}
