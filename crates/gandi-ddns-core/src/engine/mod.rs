//! One-shot update engine
//!
//! The UpdateEngine is responsible for:
//! - Resolving the current public IPv4 address via IpSource (once per run)
//! - Fetching the existing record set for each configured name via DnsProvider
//! - Validating the fetched shape (one record set, type "A", one value)
//! - Comparing and, when the IP differs, submitting a replacement
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐    resolve once    ┌──────────────┐
//! │  IpSource  │ ─────────────────► │ UpdateEngine │
//! └────────────┘                    └──────┬───────┘
//!                                          │ per record name, in order
//!                                          ▼
//!                                   ┌──────────────┐
//!                                   │ DnsProvider  │  fetch → compare →
//!                                   │              │  replace (unless dry-run)
//!                                   └──────────────┘
//! ```
//!
//! The run is fully sequential; the first error aborts it and any record
//! names not yet processed are skipped.

use std::net::Ipv4Addr;

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::{Outcome, RecordReport, RecordSet};
use crate::traits::{DnsProvider, IpSource};

/// One-shot update engine
///
/// ## Lifecycle
///
/// 1. Create with [`UpdateEngine::new()`] (validates the configuration)
/// 2. Execute with [`UpdateEngine::run()`]
/// 3. Inspect the returned reports, or the error that aborted the run
///
/// The engine holds no state between runs beyond its immutable configuration;
/// calling `run()` again performs a fresh resolve and a fresh pass over the
/// configured record names.
pub struct UpdateEngine {
    /// IP source consulted once per run
    ip_source: Box<dyn IpSource>,

    /// DNS provider for record reads and replacements
    provider: Box<dyn DnsProvider>,

    /// Immutable run configuration
    config: Config,
}

impl UpdateEngine {
    /// Create a new update engine
    ///
    /// # Parameters
    ///
    /// - `ip_source`: IP source implementation
    /// - `provider`: DNS provider implementation
    /// - `config`: Updater configuration (validated here)
    pub fn new(
        ip_source: Box<dyn IpSource>,
        provider: Box<dyn DnsProvider>,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            ip_source,
            provider,
            config,
        })
    }

    /// Run one update pass
    ///
    /// Resolves the public IP once, then processes each configured record
    /// name sequentially in the configured order. Any error (IP lookup,
    /// provider read, shape violation, provider write) aborts the whole run
    /// immediately; record names after the failing one are not touched.
    ///
    /// # Returns
    ///
    /// One [`RecordReport`] per processed record name, in order.
    pub async fn run(&self) -> Result<Vec<RecordReport>> {
        let ip = self.ip_source.current().await?;
        info!(
            "current public IP is {} (via {})",
            ip,
            self.ip_source.source_name()
        );

        let mut reports = Vec::with_capacity(self.config.record_names.len());

        for name in &self.config.record_names {
            let outcome = self.process_record(name, ip).await?;
            reports.push(RecordReport {
                name: name.clone(),
                outcome,
            });
        }

        Ok(reports)
    }

    /// Process one record name: fetch, validate shape, compare, replace
    async fn process_record(&self, name: &str, ip: Ipv4Addr) -> Result<Outcome> {
        let domain = &self.config.domain;
        let record = self.fetch_single_a_record(name).await?;

        let current = record.values[0].clone();
        let new_ip = ip.to_string();

        if current == new_ip {
            info!("[{} {}] no change, still {}", name, domain, current);
            return Ok(Outcome::Unchanged { current });
        }

        info!(
            "[{} {}] new IP found, before was {}, now is {}",
            name, domain, current, new_ip
        );

        if self.config.dry_run {
            info!(
                "[{} {}] dry run: IP not changed to {}, you would have waited at least {}s for the DNS change to propagate",
                name, domain, new_ip, record.ttl
            );
            return Ok(Outcome::DryRun {
                previous: current,
                new_ip: ip,
                ttl: record.ttl,
            });
        }

        let replacement = record.with_value(ip);
        let response = self.provider.replace_record(domain, name, &replacement).await?;

        info!(
            "[{} {}] IP changed to {}, provider replied {}, allow at least {}s for the DNS change to propagate",
            name, domain, new_ip, response.message, record.ttl
        );

        Ok(Outcome::Updated {
            previous: current,
            new_ip: ip,
            ttl: record.ttl,
            message: response.message,
        })
    }

    /// Fetch the record sets for a name and enforce the expected shape:
    /// exactly one record set, of type "A", carrying exactly one value.
    ///
    /// The provider does not guarantee any of this; a zone configured with
    /// round-robin values or extra types is a configuration mismatch this
    /// tool refuses to touch.
    async fn fetch_single_a_record(&self, name: &str) -> Result<RecordSet> {
        let fqdn = format!("{}.{}", name, self.config.domain);

        let mut sets = self
            .provider
            .records_by_name(&self.config.domain, name)
            .await?;

        if sets.len() != 1 {
            return Err(Error::RecordCount {
                fqdn,
                count: sets.len(),
            });
        }

        let record = sets.remove(0);

        if record.rtype != "A" {
            return Err(Error::RecordType {
                fqdn,
                rtype: record.rtype,
            });
        }

        if record.values.len() != 1 {
            return Err(Error::ValueCount {
                fqdn,
                count: record.values.len(),
            });
        }

        Ok(record)
    }
}
