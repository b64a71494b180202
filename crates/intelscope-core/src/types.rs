//! Core domain types shared across the intelscope crates

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Category of a search target. Drives validation pattern, backend
/// endpoint, and which per-type state slot is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Domain,
    Ip,
    Hash,
}

impl SearchType {
    /// All search types, in sidebar order.
    pub const ALL: [SearchType; 3] = [SearchType::Domain, SearchType::Ip, SearchType::Hash];

    /// Lowercase wire/name form (`"domain"`, `"ip"`, `"hash"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Domain => "domain",
            SearchType::Ip => "ip",
            SearchType::Hash => "hash",
        }
    }

    /// Human-readable label used on history cards.
    pub fn label(&self) -> &'static str {
        match self {
            SearchType::Domain => "Domain",
            SearchType::Ip => "IP Address",
            SearchType::Hash => "Hash",
        }
    }

    /// Per-type icon used in the recent-search and history lists.
    pub fn icon(&self) -> &'static str {
        match self {
            SearchType::Domain => "🌐",
            SearchType::Ip => "📍",
            SearchType::Hash => "🔐",
        }
    }

    /// Parse a lowercase wire string. Unknown values return `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "domain" => Some(SearchType::Domain),
            "ip" => Some(SearchType::Ip),
            "hash" => Some(SearchType::Hash),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical reputation verdict attached to a search target or a
/// per-source finding.
///
/// Every level has a fixed emoji and CSS classification. Unrecognized wire
/// strings degrade to [`ReputationLevel::Unknown`] presentation — they must
/// never fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationLevel {
    Clean,
    Suspicious,
    Malicious,
    Questionable,
    #[default]
    Unknown,
}

impl ReputationLevel {
    /// Parse a wire string, degrading unrecognized values to `Unknown`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "clean" => ReputationLevel::Clean,
            "suspicious" => ReputationLevel::Suspicious,
            "malicious" => ReputationLevel::Malicious,
            "questionable" => ReputationLevel::Questionable,
            _ => ReputationLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReputationLevel::Clean => "clean",
            ReputationLevel::Suspicious => "suspicious",
            ReputationLevel::Malicious => "malicious",
            ReputationLevel::Questionable => "questionable",
            ReputationLevel::Unknown => "unknown",
        }
    }

    /// Uppercase badge text (`"CLEAN"`, `"MALICIOUS"`, ...).
    pub fn badge_label(&self) -> &'static str {
        match self {
            ReputationLevel::Clean => "CLEAN",
            ReputationLevel::Suspicious => "SUSPICIOUS",
            ReputationLevel::Malicious => "MALICIOUS",
            ReputationLevel::Questionable => "QUESTIONABLE",
            ReputationLevel::Unknown => "UNKNOWN",
        }
    }

    /// Fixed emoji for this level.
    pub fn emoji(&self) -> &'static str {
        match self {
            ReputationLevel::Clean => "✅",
            ReputationLevel::Malicious => "🚨",
            ReputationLevel::Suspicious => "⚠️",
            ReputationLevel::Questionable => "🔍",
            ReputationLevel::Unknown => "❓",
        }
    }

    /// CSS classification (`reputation-clean`, ...).
    pub fn css_class(&self) -> String {
        format!("reputation-{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReputationLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ReputationLevel::from_wire(&raw))
    }
}

impl std::fmt::Display for ReputationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single per-source finding.
///
/// Only `Info` affects bucketing (manual-investigation sources). Anything
/// the backend sends outside the known set lands in `Other` and stays in
/// the automated bucket, rendered with the info styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Success,
    Error,
    Info,
    Other,
}

impl SourceStatus {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "success" => SourceStatus::Success,
            "error" => SourceStatus::Error,
            "info" => SourceStatus::Info,
            _ => SourceStatus::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStatus::Success => "success",
            SourceStatus::Error => "error",
            SourceStatus::Info => "info",
            SourceStatus::Other => "other",
        }
    }

    /// CSS pill class. Unknown statuses share the info styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            SourceStatus::Success => "status-success",
            SourceStatus::Error => "status-error",
            _ => "status-info",
        }
    }

    /// Sources that only offer a lookup link, not a verdict, are routed to
    /// the manual-investigation bucket.
    pub fn is_manual(&self) -> bool {
        matches!(self, SourceStatus::Info)
    }
}

/// One entry of the search history, as supplied by the statistics endpoint.
///
/// The timestamp stays an ISO-8601 string (the contract shape); use
/// [`parse_timestamp`] for lenient parsing at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub search_type: SearchType,
    pub target: String,
    pub reputation: ReputationLevel,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Parse an ISO-8601 timestamp leniently.
///
/// Accepts RFC 3339 (with offset) and naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// forms; naive values are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Configuration state of one reputation source, for the config view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSourceStatus {
    #[serde(default)]
    pub configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ConfigOrigin>,
}

/// Where a configured API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Config,
    Env,
}

impl ConfigOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigOrigin::Config => "config file",
            ConfigOrigin::Env => "environment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_roundtrip() {
        for ty in SearchType::ALL {
            assert_eq!(SearchType::from_wire(ty.as_str()), Some(ty));
        }
        assert_eq!(SearchType::from_wire("url"), None);
    }

    #[test]
    fn test_search_type_serde_lowercase() {
        let json = serde_json::to_string(&SearchType::Ip).unwrap();
        assert_eq!(json, "\"ip\"");
        let back: SearchType = serde_json::from_str("\"hash\"").unwrap();
        assert_eq!(back, SearchType::Hash);
    }

    #[test]
    fn test_reputation_emoji_mapping() {
        assert_eq!(ReputationLevel::Clean.emoji(), "✅");
        assert_eq!(ReputationLevel::Malicious.emoji(), "🚨");
        assert_eq!(ReputationLevel::Suspicious.emoji(), "⚠️");
        assert_eq!(ReputationLevel::Questionable.emoji(), "🔍");
        assert_eq!(ReputationLevel::Unknown.emoji(), "❓");
    }

    #[test]
    fn test_reputation_unrecognized_degrades_to_unknown() {
        assert_eq!(
            ReputationLevel::from_wire("catastrophic"),
            ReputationLevel::Unknown
        );
        // Deserialization must not fail either
        let level: ReputationLevel = serde_json::from_str("\"catastrophic\"").unwrap();
        assert_eq!(level, ReputationLevel::Unknown);
        assert_eq!(level.emoji(), "❓");
    }

    #[test]
    fn test_reputation_css_class() {
        assert_eq!(ReputationLevel::Clean.css_class(), "reputation-clean");
        assert_eq!(ReputationLevel::Unknown.css_class(), "reputation-unknown");
    }

    #[test]
    fn test_source_status_bucketing() {
        assert!(SourceStatus::Info.is_manual());
        assert!(!SourceStatus::Success.is_manual());
        assert!(!SourceStatus::Error.is_manual());
        // Unknown statuses stay automated
        assert!(!SourceStatus::from_wire("pending").is_manual());
    }

    #[test]
    fn test_source_status_css_fallback() {
        assert_eq!(SourceStatus::Success.css_class(), "status-success");
        assert_eq!(SourceStatus::Error.css_class(), "status-error");
        assert_eq!(SourceStatus::Info.css_class(), "status-info");
        assert_eq!(SourceStatus::Other.css_class(), "status-info");
    }

    #[test]
    fn test_history_entry_deserialize() {
        let json = r#"{
            "type": "ip",
            "target": "1.2.3.4",
            "reputation": "malicious",
            "timestamp": "2024-03-01T12:30:00Z",
            "country": "US"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.search_type, SearchType::Ip);
        assert_eq!(entry.reputation, ReputationLevel::Malicious);
        assert_eq!(entry.country.as_deref(), Some("US"));
    }

    #[test]
    fn test_history_entry_country_optional() {
        let json = r#"{
            "type": "domain",
            "target": "example.com",
            "reputation": "clean",
            "timestamp": "2024-03-01T12:30:00"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.country.is_none());
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_naive() {
        assert!(parse_timestamp("2024-03-01T12:30:00").is_some());
        assert!(parse_timestamp("2024-03-01T12:30:00.123456").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_config_origin_label() {
        assert_eq!(ConfigOrigin::Env.label(), "environment");
        let status: ConfigSourceStatus =
            serde_json::from_str(r#"{"configured": true, "source": "env"}"#).unwrap();
        assert_eq!(status.source, Some(ConfigOrigin::Env));
    }
}
