//! Normalization of wire check responses into view models
//!
//! This is the single place where raw backend payloads become the typed
//! cards the views render. Contract enforcement lives here too: a domain
//! or hash check without an overall verdict is rejected as a contract
//! violation rather than rendered half-empty.

use serde_json::Value;

use intelscope_api::{CheckResponse, DomainCheckResponse, IpCheckResponse, WireSourceResult};
use intelscope_core::{Error, ReputationLevel, Result, SearchType, SourceStatus};

use crate::render::{detail_rows, humanize_key, DetailRow};

/// Normalized result of any check, dispatched on the search type that
/// produced it. Hash results share the domain shape end to end.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Domain(DomainAnalysis),
    Hash(DomainAnalysis),
    Ip(IpAnalysis),
}

impl AnalysisResult {
    pub fn target(&self) -> &str {
        match self {
            AnalysisResult::Domain(a) | AnalysisResult::Hash(a) => &a.target,
            AnalysisResult::Ip(a) => &a.target,
        }
    }

    pub fn overall(&self) -> ReputationLevel {
        match self {
            AnalysisResult::Domain(a) | AnalysisResult::Hash(a) => a.overall,
            AnalysisResult::Ip(a) => a.reputation,
        }
    }
}

/// Normalized domain or hash analysis with findings split into the two
/// rendering buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainAnalysis {
    pub target: String,
    pub overall: ReputationLevel,
    /// Sources that produced a verdict or a hard failure.
    pub automated: Vec<SourceCard>,
    /// Link-only sources requiring a manual lookup.
    pub manual: Vec<SourceCard>,
}

impl DomainAnalysis {
    /// Plain-text summary for the clipboard export button.
    pub fn copy_summary(&self) -> String {
        let mut out = format!(
            "Domain: {}\nReputation: {}\n\nSources analyzed:\n",
            self.target,
            self.overall.badge_label()
        );
        for card in self.automated.iter().chain(&self.manual) {
            out.push_str(&format!("\n{}\n  Status: {}\n", card.source, card.status.as_str()));
            if let Some(rep) = card.reputation {
                out.push_str(&format!("  Reputation: {rep}\n"));
            }
        }
        out
    }
}

/// One per-source finding card.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCard {
    pub source: String,
    pub status: SourceStatus,
    pub reputation: Option<ReputationLevel>,
    pub details: Vec<DetailRow>,
    pub message: Option<String>,
    pub url: Option<String>,
}

impl SourceCard {
    fn from_wire(wire: &WireSourceResult) -> Self {
        Self {
            source: wire.source.clone(),
            status: SourceStatus::from_wire(&wire.status),
            reputation: wire.reputation.as_deref().map(ReputationLevel::from_wire),
            details: wire.details.as_ref().map(|m| detail_rows(m)).unwrap_or_default(),
            message: wire.message.clone(),
            url: wire.url.clone(),
        }
    }
}

/// Normalized IP analysis: a headline verdict plus one card per info
/// section, in backend order.
#[derive(Debug, Clone, PartialEq)]
pub struct IpAnalysis {
    pub target: String,
    pub reputation: ReputationLevel,
    pub cards: Vec<InfoCard>,
}

/// One info section of an IP result (geolocation, abuse reports, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct InfoCard {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

/// Normalize a check response for the search type that requested it.
///
/// Idempotent over its inputs: the same response always yields the same
/// analysis, so re-rendering never re-fetches.
pub fn normalize(search_type: SearchType, response: &CheckResponse) -> Result<AnalysisResult> {
    match (search_type, response) {
        (SearchType::Ip, CheckResponse::Ip(resp)) => Ok(AnalysisResult::Ip(normalize_ip(resp))),
        (SearchType::Domain, CheckResponse::Domain(resp)) => {
            Ok(AnalysisResult::Domain(normalize_domain(resp)?))
        }
        (SearchType::Hash, CheckResponse::Domain(resp)) => {
            Ok(AnalysisResult::Hash(normalize_domain(resp)?))
        }
        _ => Err(Error::contract(
            "response shape does not match the requested search type",
        )),
    }
}

fn normalize_domain(resp: &DomainCheckResponse) -> Result<DomainAnalysis> {
    let overall = resp
        .overall_reputation
        .as_deref()
        .map(ReputationLevel::from_wire)
        .ok_or_else(|| {
            Error::contract(format!(
                "check response for '{}' is missing overall_reputation",
                resp.domain
            ))
        })?;

    let mut automated = Vec::new();
    let mut manual = Vec::new();
    for wire in &resp.results {
        let card = SourceCard::from_wire(wire);
        if card.status.is_manual() {
            manual.push(card);
        } else {
            automated.push(card);
        }
    }

    Ok(DomainAnalysis {
        target: resp.domain.clone(),
        overall,
        automated,
        manual,
    })
}

fn normalize_ip(resp: &IpCheckResponse) -> IpAnalysis {
    let reputation = resp
        .reputation
        .as_deref()
        .map(ReputationLevel::from_wire)
        .unwrap_or_default();

    let cards = resp
        .results
        .iter()
        .filter_map(|(section, value)| {
            let rows = match value {
                Value::Object(map) => detail_rows(map),
                other => crate::render::value_to_display(other)
                    .map(|value| {
                        vec![DetailRow {
                            label: humanize_key(section),
                            value,
                        }]
                    })
                    .unwrap_or_default(),
            };
            if rows.is_empty() {
                None
            } else {
                Some(InfoCard {
                    title: humanize_key(section),
                    rows,
                })
            }
        })
        .collect();

    IpAnalysis {
        target: resp.ip.clone(),
        reputation,
        cards,
    }
}
