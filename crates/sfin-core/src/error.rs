use thiserror::Error;

use crate::http_client::HttpError;

/// Failure taxonomy for SimpleFIN Bridge operations.
///
/// The set is closed: every fallible operation in this crate reports one of
/// these kinds and nothing else. Two errors compare equal when they are the
/// same kind and, for [`Error::Http`], carry the same status code; wrapped
/// causes are ignored so tests can assert on outcomes without reconstructing
/// transport internals.
#[derive(Debug, Error)]
pub enum Error {
    /// The setup token is not valid base64, or does not decode to a URL.
    #[error("invalid setup token")]
    InvalidSetupToken,

    /// No access URL is available, or the one provided cannot be parsed.
    #[error("invalid access URL")]
    InvalidAccessUrl,

    /// The transport failed before a status code was received.
    #[error("network error: {0}")]
    Network(#[source] HttpError),

    /// The credentials cannot be carried in an Authorization header.
    #[error("credentials cannot be encoded for basic authentication")]
    Authentication,

    /// The server's response could not be decoded.
    #[error("decoding error: {0}")]
    Decoding(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with an unexpected HTTP status.
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },

    /// The server rejected the access URL outright. Permanent: a fresh setup
    /// token must be claimed before any further fetch can succeed.
    #[error("access revoked")]
    AccessRevoked,

    /// No account matched the requested identifier.
    #[error("account not found")]
    AccountNotFound,
}

impl Error {
    pub(crate) fn decoding(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decoding(Box::new(cause))
    }

    /// True iff this is the permanent access-revoked condition.
    pub const fn is_access_revoked(&self) -> bool {
        matches!(self, Self::AccessRevoked)
    }

    /// True when retrying the same call could plausibly succeed. The crate
    /// itself never retries; this is advisory for callers.
    pub const fn retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status } => *status >= 500,
            _ => false,
        }
    }

    /// Stable machine-readable code for logs and assertions.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSetupToken => "sfin.invalid_setup_token",
            Self::InvalidAccessUrl => "sfin.invalid_access_url",
            Self::Network(_) => "sfin.network",
            Self::Authentication => "sfin.authentication",
            Self::Decoding(_) => "sfin.decoding",
            Self::Http { .. } => "sfin.http",
            Self::AccessRevoked => "sfin.access_revoked",
            Self::AccountNotFound => "sfin.account_not_found",
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Http { status: left }, Self::Http { status: right }) => left == right,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_compare_equal_regardless_of_cause() {
        let first = Error::Network(HttpError::new("connection reset"));
        let second = Error::Network(HttpError::non_retryable("certificate rejected"));

        assert_eq!(first, second);
    }

    #[test]
    fn http_errors_compare_by_status_code() {
        assert_eq!(Error::Http { status: 500 }, Error::Http { status: 500 });
        assert_ne!(Error::Http { status: 500 }, Error::Http { status: 502 });
        assert_ne!(Error::Http { status: 401 }, Error::AccessRevoked);
    }

    #[test]
    fn only_access_revoked_satisfies_the_revocation_predicate() {
        assert!(Error::AccessRevoked.is_access_revoked());
        assert!(!Error::Http { status: 403 }.is_access_revoked());
        assert!(!Error::InvalidSetupToken.is_access_revoked());
    }

    #[test]
    fn retryability_follows_the_fault_class() {
        assert!(Error::Network(HttpError::new("timeout")).retryable());
        assert!(Error::Http { status: 503 }.retryable());
        assert!(!Error::Http { status: 404 }.retryable());
        assert!(!Error::AccessRevoked.retryable());
        assert!(!Error::Decoding("bad payload".into()).retryable());
    }

    #[test]
    fn codes_are_unique_per_kind() {
        let codes = [
            Error::InvalidSetupToken.code(),
            Error::InvalidAccessUrl.code(),
            Error::Network(HttpError::new("x")).code(),
            Error::Authentication.code(),
            Error::Decoding("x".into()).code(),
            Error::Http { status: 418 }.code(),
            Error::AccessRevoked.code(),
            Error::AccountNotFound.code(),
        ];

        let mut deduped = codes.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }
}
