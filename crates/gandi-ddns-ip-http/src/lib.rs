// # HTTP IP Source
//
// This crate resolves the caller's public IPv4 address by asking an external
// echo service (default: api.ipify.org), which answers with the address as
// plain text.
//
// One GET per lookup, no retry: a failed or malformed answer is fatal for
// the whole run, which is the engine's policy to enforce.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use gandi_ddns_core::traits::IpSource;
use gandi_ddns_core::{Error, Result};

/// Default IP echo endpoint (returns the plain-text IPv4 address)
const DEFAULT_ECHO_URL: &str = "https://api.ipify.org";

/// Default HTTP timeout for echo requests (10 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-based IP source
#[derive(Debug)]
pub struct HttpIpSource {
    /// URL of the echo service
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a source against the default echo endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_ECHO_URL)
    }

    /// Create a source against a custom echo endpoint
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::ip_lookup(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

/// Parse an echo-service response body into an IPv4 address
///
/// The body is the address as plain text, possibly with surrounding
/// whitespace. An IPv6 answer is rejected: the records this tool manages are
/// "A" records and carry IPv4 only.
fn parse_public_ip(body: &str) -> Result<Ipv4Addr> {
    let text = body.trim();

    match text.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => Ok(ip),
        Ok(IpAddr::V6(ip)) => Err(Error::ip_lookup(format!(
            "Expected an IPv4 address, got IPv6: {ip}"
        ))),
        Err(_) => Err(Error::ip_lookup(format!("Invalid IP address: '{text}'"))),
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<Ipv4Addr> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_lookup(format!("Request to {} failed: {e}", self.url)))?;

        if !response.status().is_success() {
            return Err(Error::ip_lookup(format!(
                "{} answered {}",
                self.url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ip_lookup(format!("Failed to read response: {e}")))?;

        parse_public_ip(&body)
    }

    fn source_name(&self) -> &'static str {
        "http-echo"
    }
}
