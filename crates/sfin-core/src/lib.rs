//! Client library for the SimpleFIN Bridge protocol.
//!
//! SimpleFIN is a read-only REST protocol for bank balances and transaction
//! history. This crate contains:
//! - Setup-token claiming and the access-URL lifecycle
//! - Credential-bearing access-URL parsing and authenticated request building
//! - Tolerant decoding of the account-set payload into typed records
//! - A storage-backed façade with one-shot recovery from revoked access
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sfin_core::{AccountFilters, Bridge, Client, MemoryStore};
//!
//! let mut bridge = Bridge::new(Client::new(), Arc::new(MemoryStore::new()), "sfin.access-url");
//! let filters = AccountFilters::new().with_balances_only(true);
//!
//! // Claims the token on first use, then reuses the stored access URL.
//! let set = bridge.fetch_data(&setup_token, &filters).await?;
//! for account in &set.accounts {
//!     println!("{}: {} {}", account.name, account.balance, account.currency);
//! }
//! ```
//!
//! Setup tokens are single-use: the server invalidates one on its first
//! claim, successful or not. Nothing in this crate retries a claim; retry
//! policy for everything else is the caller's, guided by
//! [`Error::retryable`].

mod access_url;

pub mod bridge;
pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod request;
pub mod store;
pub mod value;

pub use bridge::Bridge;
pub use client::Client;
pub use domain::{Account, AccountSet, Organization, Transaction};
pub use error::Error;
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use request::AccountFilters;
pub use store::{AccessUrlStore, MemoryStore};
pub use value::Value;
