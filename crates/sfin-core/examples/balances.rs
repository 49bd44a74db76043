//! # Balances Example
//!
//! Claims a setup token from the environment, then prints every account's
//! balance and its most recent transactions.
//!
//! ## Usage
//!
//! ```bash
//! export SIMPLEFIN_TOKEN="<base64 setup token from your provider>"
//! cargo run --example balances
//! ```
//!
//! ## Prerequisites
//!
//! A setup token. The SimpleFIN demo server hands them out for testing; any
//! provider implementing the protocol works the same way. Tokens are
//! single-use: a second run reuses nothing and needs a fresh token, because
//! this example keeps the claimed access URL only in memory.

use std::sync::Arc;

use sfin_core::{AccountFilters, Bridge, Client, MemoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let token = std::env::var("SIMPLEFIN_TOKEN").unwrap_or_default();
    if token.is_empty() {
        eprintln!("SIMPLEFIN_TOKEN is not set");
        std::process::exit(2);
    }

    let mut bridge = Bridge::new(
        Client::new(),
        Arc::new(MemoryStore::new()),
        "sfin.access-url",
    );

    let set = bridge.fetch_data(&token, &AccountFilters::new()).await?;

    for warning in &set.errors {
        eprintln!("provider warning: {warning}");
    }

    for account in &set.accounts {
        println!(
            "{} [{}]: {} {}",
            account.name, account.id, account.balance, account.currency
        );
        for tx in account.transactions.iter().take(5) {
            println!(
                "  {}  {:>12}  {}",
                tx.posted_date(),
                tx.amount,
                tx.description
            );
        }
    }

    Ok(())
}
