//! Configuration types for the updater
//!
//! The configuration is an explicit, immutable value constructed once by the
//! caller and passed by reference into each operation. There is no ambient
//! global state.

use serde::{Deserialize, Serialize};

/// Updater configuration
///
/// Credentials are deliberately not part of this type: the binary hands them
/// to the provider client at construction so they never travel through (or
/// get logged from) the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target DNS zone (e.g., "example.com")
    pub domain: String,

    /// Record names to manage, in processing order (e.g., ["home", "office"])
    pub record_names: Vec<String>,

    /// If true, perform all reads and comparisons but never write
    #[serde(default)]
    pub dry_run: bool,
}

impl Config {
    /// Create a new configuration
    pub fn new(domain: impl Into<String>, record_names: Vec<String>, dry_run: bool) -> Self {
        Self {
            domain: domain.into(),
            record_names,
            dry_run,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        validate_domain_name(&self.domain)?;

        if self.record_names.is_empty() {
            return Err(crate::Error::config("No record names configured"));
        }

        for name in &self.record_names {
            if name.is_empty() {
                return Err(crate::Error::config("Record name cannot be empty"));
            }
        }

        Ok(())
    }
}

/// Validate that a string is a valid domain name
///
/// This implements basic DNS domain name validation per RFC 1035.
/// It's not comprehensive but catches common errors.
pub fn validate_domain_name(domain: &str) -> Result<(), crate::Error> {
    if domain.is_empty() {
        return Err(crate::Error::config("Domain name cannot be empty"));
    }

    // Total length limit (RFC 1035: 253 chars max)
    if domain.len() > 253 {
        return Err(crate::Error::config(format!(
            "Domain name too long: {} chars (max 253). Got: {}",
            domain.len(),
            domain
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(crate::Error::config(format!(
                "Domain name has empty label: '{}'",
                domain
            )));
        }

        if label.len() > 63 {
            return Err(crate::Error::config(format!(
                "Domain label too long: {} chars (max 63). Label: '{}'",
                label.len(),
                label
            )));
        }

        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(crate::Error::config(format!(
                "Domain label contains invalid characters. Label: '{}'. \
                Valid: alphanumeric and hyphen only.",
                label
            )));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(crate::Error::config(format!(
                "Domain label cannot start or end with hyphen. Label: '{}'",
                label
            )));
        }
    }

    Ok(())
}
