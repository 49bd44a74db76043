use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::de;
use crate::value::Value;

/// Financial institution that owns an account.
///
/// Only `sfin-url` is guaranteed on the wire; every other field is
/// provider-optional and absorbs shape drift as absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "sfin-url")]
    pub sfin_url: String,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// One ledger entry in an account's history.
///
/// Monetary amounts stay strings end to end; the wire format uses decimal
/// strings to dodge float precision loss, and converting on decode would
/// reintroduce it. Parsed views are layered on as methods instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Unix seconds at which the transaction posted. String-typed wire
    /// values are parsed; unparsable ones come through as 0.
    #[serde(deserialize_with = "de::timestamp")]
    pub posted: i64,
    /// Signed decimal amount, negative for debits.
    pub amount: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub memo: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub payee: Option<String>,
    /// Unix seconds at which the transaction occurred, when the provider
    /// distinguishes it from `posted`.
    #[serde(
        default,
        deserialize_with = "de::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub transacted_at: Option<i64>,
    #[serde(
        default,
        deserialize_with = "de::optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub pending: Option<bool>,
    /// Provider-specific metadata beyond the core schema.
    #[serde(
        default,
        deserialize_with = "de::optional_extra",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra: Option<BTreeMap<String, Value>>,
}

impl Transaction {
    /// `amount` parsed as a float; 0.0 when the string does not parse.
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }

    pub fn is_debit(&self) -> bool {
        self.amount_value() < 0.0
    }

    pub fn is_credit(&self) -> bool {
        self.amount_value() > 0.0
    }

    /// Calendar date (UTC) of `posted`.
    pub fn posted_date(&self) -> Date {
        date_from_unix(self.posted)
    }

    pub fn transacted_date(&self) -> Option<Date> {
        self.transacted_at.map(date_from_unix)
    }

    /// Pending flag with absence read as settled.
    pub fn is_pending(&self) -> bool {
        self.pending.unwrap_or(false)
    }

    /// Metadata value under `key`, if the provider sent one.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.as_ref()?.get(key)
    }
}

/// A single bank account with its balance and transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub org: Organization,
    pub id: String,
    pub name: String,
    /// ISO currency code, or a provider-defined currency URL.
    pub currency: String,
    /// Current balance as a decimal string, same rationale as
    /// [`Transaction::amount`].
    pub balance: String,
    #[serde(
        rename = "available-balance",
        default,
        deserialize_with = "de::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_balance: Option<String>,
    /// Unix seconds at which `balance` was computed.
    #[serde(rename = "balance-date", deserialize_with = "de::timestamp")]
    pub balance_date: i64,
    /// Server-ordered history; empty under balances-only fetches.
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// `balance` parsed as a float; 0.0 when the string does not parse.
    pub fn balance_value(&self) -> f64 {
        self.balance.trim().parse().unwrap_or(0.0)
    }

    pub fn available_balance_value(&self) -> Option<f64> {
        self.available_balance
            .as_ref()
            .map(|raw| raw.trim().parse().unwrap_or(0.0))
    }

    /// Calendar date (UTC) of `balance_date`.
    pub fn balance_as_of(&self) -> Date {
        date_from_unix(self.balance_date)
    }
}

/// Top-level payload of an accounts fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSet {
    /// Advisory warnings from the provider, in server order.
    #[serde(default)]
    pub errors: Vec<String>,
    pub accounts: Vec<Account>,
}

impl AccountSet {
    /// First account whose id or name contains `identifier` as a
    /// case-insensitive substring. Ids are checked before names; when
    /// several accounts match, the first in server order wins.
    pub fn find_account(&self, identifier: &str) -> Option<&Account> {
        let needle = identifier.to_lowercase();
        self.accounts.iter().find(|account| {
            account.id.to_lowercase().contains(&needle)
                || account.name.to_lowercase().contains(&needle)
        })
    }
}

fn date_from_unix(seconds: i64) -> Date {
    OffsetDateTime::from_unix_timestamp(seconds)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .date()
}
