//! Record types shared between the engine and provider implementations

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A snapshot of one provider record set (rrset)
///
/// Owned by the DNS provider; the engine only reads a snapshot and,
/// when the IP differs, submits a full replacement with a single new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Record name relative to the zone (e.g., "home")
    pub name: String,

    /// Record type ("A" expected)
    pub rtype: String,

    /// Time-to-live in seconds
    pub ttl: u32,

    /// Record values (exactly one expected)
    pub values: Vec<String>,
}

impl RecordSet {
    /// Build the replacement submitted on update: identical to this record
    /// set except the single value is the new address.
    pub fn with_value(&self, ip: Ipv4Addr) -> Self {
        Self {
            name: self.name.clone(),
            rtype: self.rtype.clone(),
            ttl: self.ttl,
            values: vec![ip.to_string()],
        }
    }
}

/// The provider's answer to a replace call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceResponse {
    /// Human-readable provider message (e.g., "DNS Record Created")
    pub message: String,
}

/// What happened to one record name during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record already carried the resolved IP
    Unchanged {
        /// The value the record already had
        current: String,
    },

    /// The IP differed but dry-run suppressed the write
    DryRun {
        /// The value the record currently has
        previous: String,
        /// The address that would have been written
        new_ip: Ipv4Addr,
        /// Advisory propagation wait, from the record's TTL
        ttl: u32,
    },

    /// The record was replaced with the resolved IP
    Updated {
        /// The value the record had before
        previous: String,
        /// The address that was written
        new_ip: Ipv4Addr,
        /// Advisory propagation wait, from the record's TTL
        ttl: u32,
        /// The provider's response message
        message: String,
    },
}

/// Per-record-name report returned by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    /// The configured record name
    pub name: String,
    /// What happened to it
    pub outcome: Outcome,
}
