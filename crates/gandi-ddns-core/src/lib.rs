// # gandi-ddns-core
//
// Core library for the Gandi dynamic-DNS updater.
//
// ## Architecture Overview
//
// This library provides the provider-agnostic half of the updater:
// - **IpSource**: Trait for resolving the current public IPv4 address
// - **DnsProvider**: Trait for reading and replacing DNS record sets
// - **UpdateEngine**: One-shot driver for the resolve → compare → replace flow
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from implementations
// 2. **One-Shot**: A run processes every configured record name once, then returns
// 3. **Fail-Fast**: The first error aborts the whole run; remaining names are skipped
// 4. **Library-First**: The binary is a thin wiring layer over this crate

pub mod traits;
pub mod engine;
pub mod config;
pub mod error;
pub mod record;

// Re-export core types for convenience
pub use traits::{IpSource, DnsProvider};
pub use engine::UpdateEngine;
pub use config::Config;
pub use error::{Error, Result};
pub use record::{RecordSet, ReplaceResponse, RecordReport, Outcome};
