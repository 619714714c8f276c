// # DNS Provider Trait
//
// Defines the interface for reading and replacing DNS record sets via
// provider APIs.
//
// ## Implementations
//
// - Gandi LiveDNS v5: `gandi-ddns-livedns` crate
//
// ## Responsibilities
//
// Providers are narrow, stateless API adapters:
//
// - ✅ Perform one HTTP call per method invocation
// - ✅ Translate wire formats to [`RecordSet`] / [`ReplaceResponse`]
// - ✅ Map HTTP failures to typed errors
// - ❌ NO retry or backoff (a failure aborts the run, by the engine's choice)
// - ❌ NO caching of records between calls
// - ❌ NO comparison logic (deciding whether an update is needed is the
//   engine's job)
//
// Keeping providers this thin is what lets the contract tests substitute a
// scripted double for the whole network surface.

use async_trait::async_trait;

use crate::record::{RecordSet, ReplaceResponse};

/// Trait for DNS provider implementations
///
/// Implementations must be thread-safe and usable across async tasks.
/// Credentials live inside the implementation and must never appear in
/// logs or `Debug` output.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Fetch every record set stored for a record name
    ///
    /// The engine validates the shape of the answer (exactly one record set,
    /// type "A", exactly one value); implementations return whatever the
    /// provider stores.
    ///
    /// # Parameters
    ///
    /// - `domain`: The DNS zone (e.g., "example.com")
    /// - `name`: The record name relative to the zone (e.g., "home")
    async fn records_by_name(
        &self,
        domain: &str,
        name: &str,
    ) -> Result<Vec<RecordSet>, crate::Error>;

    /// Fetch the single record set for a (name, type) pair
    ///
    /// This is the read used when the caller already knows the record type
    /// and wants the provider to do the filtering.
    ///
    /// # Parameters
    ///
    /// - `domain`: The DNS zone
    /// - `name`: The record name relative to the zone
    /// - `rtype`: The record type (e.g., "A")
    async fn record_by_name_and_type(
        &self,
        domain: &str,
        name: &str,
        rtype: &str,
    ) -> Result<RecordSet, crate::Error>;

    /// Replace the record set stored for a record name
    ///
    /// The submitted record set fully replaces what the provider stores for
    /// the name; there is no partial update.
    ///
    /// # Parameters
    ///
    /// - `domain`: The DNS zone
    /// - `name`: The record name relative to the zone
    /// - `record`: The replacement record set
    ///
    /// # Returns
    ///
    /// The provider's response message on success.
    async fn replace_record(
        &self,
        domain: &str,
        name: &str,
        record: &RecordSet,
    ) -> Result<ReplaceResponse, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
