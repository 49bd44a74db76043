//! # Domain Models
//!
//! Typed records for the account-set payload.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AccountSet`] | Top-level payload: provider warnings plus accounts |
//! | [`Account`] | One bank account with balance and history |
//! | [`Transaction`] | A single ledger entry |
//! | [`Organization`] | Institution that owns an account |
//!
//! ## Decoding rules
//!
//! Required fields fail the decode when missing or mistyped; optional fields
//! absorb absence and shape drift as `None`. Timestamps accept either a JSON
//! integer or a numeric string, because providers disagree on which to send:
//!
//! ```rust,ignore
//! use sfin_core::Account;
//!
//! // "balance-date" may arrive as 1628614046 or "1628614046"; both decode
//! // to the same account. An unparsable string becomes 0, not an error.
//! let account: Account = serde_json::from_str(payload)?;
//! ```
//!
//! Monetary fields (`balance`, `amount`) are decimal strings on the wire and
//! stay strings in the model; `balance_value()` / `amount_value()` provide
//! parsed views.

mod de;
mod models;

pub use models::{Account, AccountSet, Organization, Transaction};
