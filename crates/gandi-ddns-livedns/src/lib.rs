// # Gandi LiveDNS Provider
//
// This crate implements the `DnsProvider` trait against the Gandi LiveDNS
// v5 REST API.
//
// ## Scope
//
// The provider is a thin, stateless API adapter:
//
// - ✅ One HTTP request per method invocation
// - ✅ Typed error mapping for HTTP status codes (401/403, 404, others)
// - ✅ HTTP timeout configured (30 seconds)
// - ❌ NO retry logic (a failure aborts the run, by the engine's choice)
// - ❌ NO caching (the engine fetches fresh state every run)
// - ❌ NO comparison logic (owned by the engine)
//
// ## Security Requirements
//
// - API key NEVER appears in logs or Debug output
// - Provider MUST fail fast if the key is empty
//
// ## API Reference
//
// - LiveDNS v5: https://api.gandi.net/docs/livedns/
// - Read records:   GET `/v5/livedns/domains/:fqdn/records/:rrset_name`
// - Read one rrset: GET `/v5/livedns/domains/:fqdn/records/:rrset_name/:rrset_type`
// - Replace:        PUT `/v5/livedns/domains/:fqdn/records/:rrset_name`
//
// Requests are authenticated with `Authorization: Apikey <key>` and, when an
// organization sharing id is configured, a `sharing_id` query parameter.

use std::time::Duration;

use async_trait::async_trait;
use gandi_ddns_core::record::{RecordSet, ReplaceResponse};
use gandi_ddns_core::traits::DnsProvider;
use gandi_ddns_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gandi LiveDNS API base URL
const LIVEDNS_API_BASE: &str = "https://api.gandi.net/v5/livedns";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// One rrset in the LiveDNS wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRecordSet {
    rrset_name: String,
    rrset_type: String,
    rrset_ttl: u32,
    rrset_values: Vec<String>,
}

impl From<WireRecordSet> for RecordSet {
    fn from(wire: WireRecordSet) -> Self {
        RecordSet {
            name: wire.rrset_name,
            rtype: wire.rrset_type,
            ttl: wire.rrset_ttl,
            values: wire.rrset_values,
        }
    }
}

impl From<&RecordSet> for WireRecordSet {
    fn from(record: &RecordSet) -> Self {
        WireRecordSet {
            rrset_name: record.name.clone(),
            rrset_type: record.rtype.clone(),
            rrset_ttl: record.ttl,
            rrset_values: record.values.clone(),
        }
    }
}

/// Body of a PUT on `/records/:rrset_name`: the full replacement rrset list
#[derive(Debug, Serialize)]
struct ReplaceBody {
    items: Vec<WireRecordSet>,
}

/// Body of a successful PUT response
#[derive(Debug, Deserialize)]
struct WireMessage {
    message: String,
}

/// Gandi LiveDNS provider
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API key.
pub struct LiveDnsProvider {
    /// LiveDNS API key
    /// ⚠️ NEVER log this value
    api_key: String,

    /// Organization sharing id, sent as a query parameter when set
    sharing_id: Option<String>,

    /// API base URL (overridable for the sandbox environment)
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for LiveDnsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveDnsProvider")
            .field("api_key", &"<REDACTED>")
            .field("sharing_id", &self.sharing_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LiveDnsProvider {
    /// Create a new LiveDNS provider against the production API
    ///
    /// # Parameters
    ///
    /// - `api_key`: LiveDNS API key
    /// - `sharing_id`: Optional organization sharing id
    pub fn new(api_key: impl Into<String>, sharing_id: Option<String>) -> Result<Self> {
        Self::with_base_url(api_key, sharing_id, LIVEDNS_API_BASE)
    }

    /// Create a provider against a custom base URL (e.g., the Gandi sandbox)
    pub fn with_base_url(
        api_key: impl Into<String>,
        sharing_id: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::config("LiveDNS API key cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::provider("livedns", format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            sharing_id,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL of the rrset collection for a record name
    fn records_url(&self, domain: &str, name: &str) -> String {
        format!("{}/domains/{}/records/{}", self.base_url, domain, name)
    }

    /// URL of the single rrset for a (record name, type) pair
    fn record_type_url(&self, domain: &str, name: &str, rtype: &str) -> String {
        format!(
            "{}/domains/{}/records/{}/{}",
            self.base_url, domain, name, rtype
        )
    }

    /// Attach authentication to a request
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("Authorization", format!("Apikey {}", self.api_key));
        match &self.sharing_id {
            Some(id) => request.query(&[("sharing_id", id.as_str())]),
            None => request,
        }
    }

    /// Read and decode a successful response body, or map the failure status
    /// to a typed error.
    async fn read_body(response: reqwest::Response, what: &str) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::provider("livedns", format!("Failed to read response: {e}")))?;

        if status.is_success() {
            return Ok(body);
        }

        let detail = error_detail(&body);
        match status.as_u16() {
            401 | 403 => Err(Error::auth(format!(
                "{what}: {detail} (status {status})"
            ))),
            404 => Err(Error::not_found(format!("{what}: {detail}"))),
            _ => Err(Error::provider(
                "livedns",
                format!("{what}: {status} - {detail}"),
            )),
        }
    }
}

/// Extract the human-readable detail from a Gandi error body
///
/// Error bodies carry a `message` field (and sometimes a `cause`); when the
/// body is not JSON at all, the raw text is the best we can report.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .or_else(|| json.get("cause"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[async_trait]
impl DnsProvider for LiveDnsProvider {
    async fn records_by_name(&self, domain: &str, name: &str) -> Result<Vec<RecordSet>> {
        let url = self.records_url(domain, name);
        tracing::debug!("GET {url}");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::provider("livedns", format!("HTTP request failed: {e}")))?;

        let body = Self::read_body(response, &format!("reading records of {name}.{domain}")).await?;
        let wire: Vec<WireRecordSet> = serde_json::from_str(&body)?;
        Ok(wire.into_iter().map(RecordSet::from).collect())
    }

    async fn record_by_name_and_type(
        &self,
        domain: &str,
        name: &str,
        rtype: &str,
    ) -> Result<RecordSet> {
        let url = self.record_type_url(domain, name, rtype);
        tracing::debug!("GET {url}");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::provider("livedns", format!("HTTP request failed: {e}")))?;

        let body = Self::read_body(
            response,
            &format!("reading the {rtype} record of {name}.{domain}"),
        )
        .await?;
        let wire: WireRecordSet = serde_json::from_str(&body)?;
        Ok(wire.into())
    }

    async fn replace_record(
        &self,
        domain: &str,
        name: &str,
        record: &RecordSet,
    ) -> Result<ReplaceResponse> {
        let url = self.records_url(domain, name);
        tracing::debug!("PUT {url}");

        let payload = ReplaceBody {
            items: vec![record.into()],
        };

        let response = self
            .authorize(self.client.put(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::provider("livedns", format!("HTTP request failed: {e}")))?;

        let body =
            Self::read_body(response, &format!("replacing records of {name}.{domain}")).await?;
        let message: WireMessage = serde_json::from_str(&body)?;
        Ok(ReplaceResponse {
            message: message.message,
        })
    }

    fn provider_name(&self) -> &'static str {
        "livedns"
    }
}
