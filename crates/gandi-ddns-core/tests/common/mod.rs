//! Test doubles and common utilities for contract tests
//!
//! These doubles stand in for the live network collaborators (IP echo
//! service, LiveDNS API) so the update flow can be exercised
//! deterministically.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gandi_ddns_core::error::Result;
use gandi_ddns_core::record::{RecordSet, ReplaceResponse};
use gandi_ddns_core::traits::{DnsProvider, IpSource};
use gandi_ddns_core::{Config, Error};

/// An IP source that always answers with a fixed address
pub struct FixedIpSource {
    ip: Ipv4Addr,
    /// Call counter for current()
    current_call_count: Arc<AtomicUsize>,
}

impl FixedIpSource {
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            ip,
            current_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times current() was called
    pub fn current_call_count(&self) -> usize {
        self.current_call_count.load(Ordering::SeqCst)
    }

    /// Create a new FixedIpSource that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            ip: other.ip,
            current_call_count: Arc::clone(&other.current_call_count),
        }
    }
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current(&self) -> Result<Ipv4Addr> {
        self.current_call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.ip)
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// An IP source whose lookup always fails
pub struct FailingIpSource;

#[async_trait::async_trait]
impl IpSource for FailingIpSource {
    async fn current(&self) -> Result<Ipv4Addr> {
        Err(Error::ip_lookup("echo service unreachable"))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// A scripted DnsProvider backed by an in-memory record table
///
/// Tracks every fetch and replace call so tests can assert call counts,
/// processing order, and exact replacement payloads. Failures can be
/// injected per record name.
pub struct ScriptedDnsProvider {
    /// Record sets by record name
    records: Arc<std::sync::Mutex<HashMap<String, Vec<RecordSet>>>>,
    /// Record names fetched, in call order
    fetch_log: Arc<std::sync::Mutex<Vec<String>>>,
    /// Replacement payloads submitted, in call order
    replace_log: Arc<std::sync::Mutex<Vec<(String, RecordSet)>>>,
    /// Call counter for records_by_name()
    fetch_call_count: Arc<AtomicUsize>,
    /// Call counter for replace_record()
    replace_call_count: Arc<AtomicUsize>,
    /// Record name whose fetch fails, if any
    fail_fetch_for: Arc<std::sync::Mutex<Option<String>>>,
    /// Record name whose replace fails, if any
    fail_replace_for: Arc<std::sync::Mutex<Option<String>>>,
}

impl ScriptedDnsProvider {
    pub fn new() -> Self {
        Self {
            records: Arc::new(std::sync::Mutex::new(HashMap::new())),
            fetch_log: Arc::new(std::sync::Mutex::new(Vec::new())),
            replace_log: Arc::new(std::sync::Mutex::new(Vec::new())),
            fetch_call_count: Arc::new(AtomicUsize::new(0)),
            replace_call_count: Arc::new(AtomicUsize::new(0)),
            fail_fetch_for: Arc::new(std::sync::Mutex::new(None)),
            fail_replace_for: Arc::new(std::sync::Mutex::new(None)),
        }
    }

    /// Script the record sets returned for a name
    pub fn set_records(&self, name: &str, sets: Vec<RecordSet>) {
        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), sets);
    }

    /// Make records_by_name() fail for the given name
    pub fn fail_fetch_for(&self, name: &str) {
        *self.fail_fetch_for.lock().unwrap() = Some(name.to_string());
    }

    /// Make replace_record() fail for the given name
    pub fn fail_replace_for(&self, name: &str) {
        *self.fail_replace_for.lock().unwrap() = Some(name.to_string());
    }

    /// Get the number of times records_by_name() was called
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_call_count.load(Ordering::SeqCst)
    }

    /// Get the number of times replace_record() was called
    pub fn replace_call_count(&self) -> usize {
        self.replace_call_count.load(Ordering::SeqCst)
    }

    /// Get the record names fetched, in call order
    pub fn fetched_names(&self) -> Vec<String> {
        self.fetch_log.lock().unwrap().clone()
    }

    /// Get the replacement payloads submitted, in call order
    pub fn replaced_records(&self) -> Vec<(String, RecordSet)> {
        self.replace_log.lock().unwrap().clone()
    }

    /// Create a new ScriptedDnsProvider that shares state with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            records: Arc::clone(&other.records),
            fetch_log: Arc::clone(&other.fetch_log),
            replace_log: Arc::clone(&other.replace_log),
            fetch_call_count: Arc::clone(&other.fetch_call_count),
            replace_call_count: Arc::clone(&other.replace_call_count),
            fail_fetch_for: Arc::clone(&other.fail_fetch_for),
            fail_replace_for: Arc::clone(&other.fail_replace_for),
        }
    }
}

#[async_trait::async_trait]
impl DnsProvider for ScriptedDnsProvider {
    async fn records_by_name(&self, _domain: &str, name: &str) -> Result<Vec<RecordSet>> {
        self.fetch_call_count.fetch_add(1, Ordering::SeqCst);
        self.fetch_log.lock().unwrap().push(name.to_string());

        if self.fail_fetch_for.lock().unwrap().as_deref() == Some(name) {
            return Err(Error::provider("scripted", "injected fetch failure"));
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn record_by_name_and_type(
        &self,
        domain: &str,
        name: &str,
        rtype: &str,
    ) -> Result<RecordSet> {
        self.records_by_name(domain, name)
            .await?
            .into_iter()
            .find(|r| r.rtype == rtype)
            .ok_or_else(|| Error::not_found(format!("{name}.{domain} ({rtype})")))
    }

    async fn replace_record(
        &self,
        _domain: &str,
        name: &str,
        record: &RecordSet,
    ) -> Result<ReplaceResponse> {
        self.replace_call_count.fetch_add(1, Ordering::SeqCst);
        self.replace_log
            .lock()
            .unwrap()
            .push((name.to_string(), record.clone()));

        if self.fail_replace_for.lock().unwrap().as_deref() == Some(name) {
            return Err(Error::provider("scripted", "injected replace failure"));
        }

        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), vec![record.clone()]);

        Ok(ReplaceResponse {
            message: "DNS Record Created".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Helper to build a single-value A record set
pub fn a_record(name: &str, ttl: u32, value: &str) -> RecordSet {
    RecordSet {
        name: name.to_string(),
        rtype: "A".to_string(),
        ttl,
        values: vec![value.to_string()],
    }
}

/// Helper to create a minimal Config for testing
pub fn test_config(names: &[&str], dry_run: bool) -> Config {
    Config::new(
        "example.com",
        names.iter().map(|s| s.to_string()).collect(),
        dry_run,
    )
}
