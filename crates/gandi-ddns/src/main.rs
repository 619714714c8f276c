// # gandi-ddns - One-shot dynamic-DNS updater for Gandi LiveDNS
//
// This binary is a THIN integration layer:
// 1. Read configuration from environment variables
// 2. Parse the command line (one flag: -n / --dry-run)
// 3. Initialize tracing and the runtime
// 4. Wire the IP source and the LiveDNS client into the update engine
// 5. Translate the run result into the process exit status
//
// All update logic lives in gandi-ddns-core.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `GANDI_APIKEY`: LiveDNS API key (required)
// - `GANDI_SHARINGID`: Organization sharing id (required)
// - `GANDI_DOMAIN`: Target DNS zone (required)
// - `GANDI_RECORDNAME`: Record name(s) to update, comma separated (required)
// - `GANDI_IP_ECHO_URL`: Override of the IP echo endpoint (optional)
// - `GANDI_LOG_LEVEL`: trace, debug, info, warn, error (optional, default info)
//
// ## Example
//
// ```bash
// export GANDI_APIKEY=your_key
// export GANDI_SHARINGID=your_org_uuid
// export GANDI_DOMAIN=example.com
// export GANDI_RECORDNAME=home,office
//
// gandi-ddns        # update
// gandi-ddns -n     # dry run, report only
// ```
//
// Exit status is 0 on full success and 1 on any configuration error, IP
// lookup failure, provider error, or record-shape violation. The first fatal
// condition terminates the run; error categories are distinguished in
// messages, not in exit codes.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use gandi_ddns_core::UpdateEngine;
use gandi_ddns_ip_http::HttpIpSource;
use gandi_ddns_livedns::LiveDnsProvider;

/// One-shot dynamic-DNS updater for Gandi LiveDNS
#[derive(Parser, Debug)]
#[command(name = "gandi-ddns", version, about)]
struct Cli {
    /// Dry run: report what would change without writing anything
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,
}

/// Application configuration, as read from the environment
struct Config {
    api_key: String,
    sharing_id: String,
    domain: String,
    record_names: Vec<String>,
    echo_url: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Absent variables load as empty values; `validate()` is what decides
    /// whether that is acceptable, so every missing-variable message comes
    /// from one place.
    fn from_env() -> Self {
        Self {
            api_key: env::var("GANDI_APIKEY").unwrap_or_default(),
            sharing_id: env::var("GANDI_SHARINGID").unwrap_or_default(),
            domain: env::var("GANDI_DOMAIN").unwrap_or_default(),
            record_names: env::var("GANDI_RECORDNAME")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            echo_url: env::var("GANDI_IP_ECHO_URL").ok().filter(|s| !s.is_empty()),
            log_level: env::var("GANDI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Validate the configuration
    ///
    /// Every failure names the exact variable that must be fixed, and is
    /// raised before any network object is built.
    fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "Environment variable GANDI_APIKEY must be set with the API key from Gandi"
            );
        }

        if self.sharing_id.is_empty() {
            anyhow::bail!(
                "Environment variable GANDI_SHARINGID must be set with the corporate uuid from Gandi"
            );
        }

        if self.domain.is_empty() {
            anyhow::bail!(
                "Environment variable GANDI_DOMAIN must be set with the domain you'd like to target"
            );
        }

        gandi_ddns_core::config::validate_domain_name(&self.domain)
            .map_err(|e| anyhow::anyhow!("GANDI_DOMAIN is not a valid domain name: {e}"))?;

        if self.record_names.is_empty() {
            anyhow::bail!(
                "Environment variable GANDI_RECORDNAME must be set with the DNS records you'd like to update (A single entry), comma separated"
            );
        }

        if let Some(ref url) = self.echo_url
            && !url.starts_with("https://")
            && !url.starts_with("http://")
        {
            anyhow::bail!(
                "GANDI_IP_ECHO_URL must use HTTP or HTTPS scheme. Got: {}",
                url
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "GANDI_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration before anything touches the network.
    // Tracing is not installed yet at this point, hence stderr.
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return ExitCode::FAILURE;
    }

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    // The run is fully sequential; a single-threaded runtime is all it needs.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Wire the components together and run one update pass
async fn run(cli: Cli, config: Config) -> Result<()> {
    if cli.dry_run {
        info!("dry run requested, no record will be written");
    }

    let provider = LiveDnsProvider::new(config.api_key, Some(config.sharing_id))
        .context("building the LiveDNS client")?;

    let ip_source = match config.echo_url {
        Some(url) => HttpIpSource::with_url(url),
        None => HttpIpSource::new(),
    }
    .context("building the IP source")?;

    let engine = UpdateEngine::new(
        Box::new(ip_source),
        Box::new(provider),
        gandi_ddns_core::Config::new(config.domain, config.record_names, cli.dry_run),
    )?;

    let reports = engine.run().await?;
    info!("run complete, {} record name(s) processed", reports.len());

    Ok(())
}
