//! Error types for the updater
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the updater
///
/// Every category is fatal: the engine propagates the first error it sees
/// and the remaining record names are not processed.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Public-IP resolution errors
    #[error("IP lookup error: {0}")]
    IpLookup(String),

    /// Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Domain or record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// The provider returned more or fewer record sets than the single one expected
    #[error("unexpected configuration of {fqdn}: found {count} record sets instead of 1")]
    RecordCount {
        /// Fully qualified record name
        fqdn: String,
        /// Number of record sets the provider returned
        count: usize,
    },

    /// The single record set has a type other than "A"
    #[error("unexpected configuration of {fqdn}: found a {rtype} record instead of A")]
    RecordType {
        /// Fully qualified record name
        fqdn: String,
        /// Observed record type
        rtype: String,
    },

    /// The single record set carries more or fewer values than the single one expected
    #[error("unexpected configuration of {fqdn}: found {count} record values instead of 1")]
    ValueCount {
        /// Fully qualified record name
        fqdn: String,
        /// Number of values the record set carries
        count: usize,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an IP lookup error
    pub fn ip_lookup(msg: impl Into<String>) -> Self {
        Self::IpLookup(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_errors_name_the_fqdn_and_observed_count() {
        let err = Error::ValueCount {
            fqdn: "home.example.com".to_string(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "unexpected configuration of home.example.com: found 3 record values instead of 1"
        );

        let err = Error::RecordCount {
            fqdn: "home.example.com".to_string(),
            count: 0,
        };
        assert!(err.to_string().contains("found 0 record sets"));

        let err = Error::RecordType {
            fqdn: "home.example.com".to_string(),
            rtype: "CNAME".to_string(),
        };
        assert!(err.to_string().contains("CNAME record instead of A"));
    }
}
