//! Wire types for the backend JSON contract
//!
//! These structs mirror the backend payloads exactly, before any
//! normalization. Fields the backend may omit are `Option` or defaulted so
//! a sparse payload never fails to parse; contract enforcement (such as a
//! required overall reputation) happens in the normalization layer, where
//! the violation can be reported per search.

use serde::Deserialize;
use serde_json::{Map, Value};

use intelscope_core::{ConfigSourceStatus, HistoryEntry};

/// One per-source finding inside a domain or hash check response.
#[derive(Debug, Clone, Deserialize)]
pub struct WireSourceResult {
    pub source: String,
    pub status: String,
    #[serde(default)]
    pub reputation: Option<String>,
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `POST /api/check` for domains and file hashes.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainCheckResponse {
    pub domain: String,
    /// Required by contract for a successful check; absence is a contract
    /// violation surfaced during normalization.
    #[serde(default)]
    pub overall_reputation: Option<String>,
    #[serde(default)]
    pub results: Vec<WireSourceResult>,
}

/// Response of `POST /api/check-ip`.
///
/// The `results` map preserves backend ordering: each key is an info
/// section name, each value an arbitrary detail object.
#[derive(Debug, Clone, Deserialize)]
pub struct IpCheckResponse {
    pub ip: String,
    #[serde(default)]
    pub reputation: Option<String>,
    #[serde(default)]
    pub results: Map<String, Value>,
}

/// Either branch of a check, dispatched by endpoint.
#[derive(Debug, Clone)]
pub enum CheckResponse {
    Domain(DomainCheckResponse),
    Ip(IpCheckResponse),
}

/// Aggregate counters of the `summary` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub domains: u64,
    #[serde(default)]
    pub ips: u64,
    #[serde(default)]
    pub hashes: u64,
}

/// Reputation tallies of the `reputation_distribution` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReputationCounts {
    #[serde(default)]
    pub clean: u64,
    #[serde(default)]
    pub suspicious: u64,
    #[serde(default)]
    pub malicious: u64,
    #[serde(default)]
    pub questionable: u64,
    #[serde(default)]
    pub unknown: u64,
}

/// Response of `GET /api/statistics`. Every block is defaulted so a
/// partial payload still renders what it carries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub summary: SummaryCounts,
    #[serde(default)]
    pub reputation_distribution: ReputationCounts,
    /// `(country key, threat count)` pairs; keys may be ISO codes or names.
    #[serde(default)]
    pub threat_map: Vec<(String, u64)>,
    #[serde(default)]
    pub recent_searches: Vec<HistoryEntry>,
}

/// Response of `GET /api/config/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigStatusResponse {
    #[serde(default)]
    pub sources: std::collections::BTreeMap<String, ConfigSourceStatus>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
