//! Shared fixtures and doubles for the behavior suites.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

pub use sfin_core::{
    AccessUrlStore, Account, AccountFilters, AccountSet, Bridge, Client, Error, HttpClient,
    HttpError, HttpMethod, HttpRequest, HttpResponse, MemoryStore, Organization, Transaction,
    Value,
};
pub use std::sync::Arc;

/// Transport double that replays a scripted queue of outcomes and records
/// every request it saw. An exhausted script answers 200 with an empty
/// account set.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.script
            .lock()
            .expect("script lock should not be poisoned")
            .push_back(Ok(response));
    }

    pub fn push_error(&self, error: HttpError) {
        self.script
            .lock()
            .expect("script lock should not be poisoned")
            .push_back(Err(error));
    }

    /// Every request executed so far, in dispatch order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request lock should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request lock should not be poisoned")
            .push(request);
        let outcome = self
            .script
            .lock()
            .expect("script lock should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::ok(&br#"{"errors":[],"accounts":[]}"#[..])));
        Box::pin(async move { outcome })
    }
}

/// Minimal account JSON in the wire shape: fixed org, USD, empty history.
pub fn account_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "org": { "sfin-url": "https://bridge.example/simplefin", "name": "Example Bank" },
        "id": id,
        "name": name,
        "currency": "USD",
        "balance": "100.00",
        "balance-date": 1_628_614_046i64,
        "transactions": []
    })
}

/// Full account-set body, serialized the way the server would send it.
pub fn account_set_bytes(accounts: Vec<serde_json::Value>) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "errors": [], "accounts": accounts }))
        .expect("fixture serializes")
}
