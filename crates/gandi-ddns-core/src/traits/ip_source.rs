// # IP Source Trait
//
// Defines the interface for resolving the caller's current public IPv4 address.
//
// ## Implementations
//
// - HTTP echo service: `gandi-ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use gandi_ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//
//     let current_ip = source.current().await?;
//     println!("public IP: {current_ip}");
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Trait for IP source implementations
///
/// An IP source performs one lookup per call and returns the externally
/// visible IPv4 address. The engine calls it exactly once per run, before
/// any provider traffic, and reuses the answer for every record name.
///
/// Implementations must be thread-safe and usable across async tasks.
/// They must not retry on failure: a lookup error aborts the whole run,
/// which is the engine's decision to make, not the source's.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Resolve the current public IPv4 address
    ///
    /// # Returns
    ///
    /// - `Ok(Ipv4Addr)`: The current externally visible address
    /// - `Err(Error)`: If unable to determine the current IP
    async fn current(&self) -> Result<Ipv4Addr, crate::Error>;

    /// Get the source name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}
