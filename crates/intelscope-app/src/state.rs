//! Application state (the Model in the update loop)

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use intelscope_api::SummaryCounts;
use intelscope_core::{ConfigSourceStatus, HistoryEntry, ReputationLevel, SearchType, ValidationCue};

use crate::charts::{BarChart, DoughnutChart, ThreatMapView};
use crate::message::Filter;
use crate::normalize::AnalysisResult;
use crate::render::{HistoryCard, RecentSearchRow};
use crate::settings::Settings;

/// Color theme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The visible view, one per sidebar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Domain,
    Ip,
    Hash,
    Statistics,
    History,
    Config,
}

impl View {
    pub fn for_search(search_type: SearchType) -> Self {
        match search_type {
            SearchType::Domain => View::Domain,
            SearchType::Ip => View::Ip,
            SearchType::Hash => View::Hash,
        }
    }

    /// The search type this view hosts, if it is a search view.
    pub fn search_type(&self) -> Option<SearchType> {
        match self {
            View::Domain => Some(SearchType::Domain),
            View::Ip => Some(SearchType::Ip),
            View::Hash => Some(SearchType::Hash),
            _ => None,
        }
    }
}

/// Lifecycle of one search slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Per-type search state. Each search type owns one slot; slots never
/// interfere with each other.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub phase: SearchPhase,
    /// Current contents of the input box.
    pub input: String,
    pub cue: ValidationCue,
    /// Submission counter; completions carrying an older value are stale.
    pub seq: u64,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl SearchState {
    /// Whether the submit button is enabled. Only emptiness and an
    /// in-flight request block submission; a failing validation cue
    /// does not.
    pub fn can_submit(&self) -> bool {
        self.phase != SearchPhase::Loading && !self.input.trim().is_empty()
    }

    /// Whether the export/copy actions are available. Only completed
    /// domain lookups have a clipboard summary to offer.
    pub fn export_ready(&self) -> bool {
        self.phase == SearchPhase::Success
            && matches!(self.result, Some(AnalysisResult::Domain(_)))
    }

    pub fn reset(&mut self) {
        let seq = self.seq;
        *self = SearchState::default();
        // keep the counter monotonic across resets
        self.seq = seq;
    }
}

/// The three independent search slots.
#[derive(Debug, Clone, Default)]
pub struct SearchSlots {
    pub domain: SearchState,
    pub ip: SearchState,
    pub hash: SearchState,
}

impl SearchSlots {
    pub fn slot(&self, search_type: SearchType) -> &SearchState {
        match search_type {
            SearchType::Domain => &self.domain,
            SearchType::Ip => &self.ip,
            SearchType::Hash => &self.hash,
        }
    }

    pub fn slot_mut(&mut self, search_type: SearchType) -> &mut SearchState {
        match search_type {
            SearchType::Domain => &mut self.domain,
            SearchType::Ip => &mut self.ip,
            SearchType::Hash => &mut self.hash,
        }
    }
}

/// Severity of a transient notice (toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Lifecycle of a background fetch feeding a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Statistics view: summary counters, the two charts, the threat map,
/// and the recent-searches list.
#[derive(Debug, Clone, Default)]
pub struct StatsViewState {
    pub phase: FetchPhase,
    pub summary: SummaryCounts,
    pub reputation_chart: Option<DoughnutChart>,
    pub type_chart: Option<BarChart>,
    pub threat_map: Option<ThreatMapView>,
    pub recent: Vec<RecentSearchRow>,
}

/// History view: the raw entries plus the filtered cards currently shown.
#[derive(Debug, Clone, Default)]
pub struct HistoryViewState {
    pub phase: FetchPhase,
    pub entries: Vec<HistoryEntry>,
    pub type_filter: Filter<SearchType>,
    pub reputation_filter: Filter<ReputationLevel>,
    pub visible: Vec<HistoryCard>,
}

impl HistoryViewState {
    /// Recompute the visible cards from the held entries and filters.
    /// Pure over local state; changing a filter never re-fetches.
    pub fn recompute(&mut self, now: DateTime<Utc>) {
        self.visible = self
            .entries
            .iter()
            .filter(|e| {
                self.type_filter.matches(&e.search_type)
                    && self.reputation_filter.matches(&e.reputation)
            })
            .map(|e| HistoryCard::from_entry(e, now))
            .collect();
    }
}

/// Config view: per-source configuration state.
#[derive(Debug, Clone, Default)]
pub struct ConfigViewState {
    pub phase: FetchPhase,
    pub sources: BTreeMap<String, ConfigSourceStatus>,
}

impl ConfigViewState {
    pub fn configured_count(&self) -> usize {
        self.sources.values().filter(|s| s.configured).count()
    }
}

/// Root application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    pub theme: Theme,
    pub searches: SearchSlots,
    pub stats: StatsViewState,
    pub history: HistoryViewState,
    pub config: ConfigViewState,
    pub notices: Vec<Notice>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::Domain,
            theme: settings.ui.theme,
            searches: SearchSlots::default(),
            stats: StatsViewState::default(),
            history: HistoryViewState::default(),
            config: ConfigViewState::default(),
            notices: Vec::new(),
            settings,
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_blocks_only_emptiness_and_loading() {
        let mut slot = SearchState::default();
        assert!(!slot.can_submit());
        slot.input = "   ".to_string();
        assert!(!slot.can_submit());

        // invalid input is still submittable
        slot.input = "999.1.1.1".to_string();
        slot.cue = ValidationCue::Invalid;
        assert!(slot.can_submit());

        slot.phase = SearchPhase::Loading;
        assert!(!slot.can_submit());
    }

    #[test]
    fn test_reset_keeps_seq_monotonic() {
        let mut slot = SearchState {
            seq: 7,
            input: "example.com".to_string(),
            phase: SearchPhase::Success,
            ..Default::default()
        };
        slot.reset();
        assert_eq!(slot.seq, 7);
        assert_eq!(slot.phase, SearchPhase::Idle);
        assert!(slot.input.is_empty());
    }

    #[test]
    fn test_export_ready_only_for_domain_results() {
        use crate::normalize::{DomainAnalysis, IpAnalysis};

        let mut slot = SearchState {
            phase: SearchPhase::Success,
            result: Some(AnalysisResult::Domain(DomainAnalysis {
                target: "example.com".to_string(),
                overall: ReputationLevel::Clean,
                automated: Vec::new(),
                manual: Vec::new(),
            })),
            ..Default::default()
        };
        assert!(slot.export_ready());

        slot.result = Some(AnalysisResult::Ip(IpAnalysis {
            target: "8.8.8.8".to_string(),
            reputation: ReputationLevel::Clean,
            cards: Vec::new(),
        }));
        assert!(!slot.export_ready());

        slot.phase = SearchPhase::Loading;
        slot.result = None;
        assert!(!slot.export_ready());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut slots = SearchSlots::default();
        slots.slot_mut(SearchType::Ip).phase = SearchPhase::Loading;
        assert_eq!(slots.slot(SearchType::Domain).phase, SearchPhase::Idle);
        assert_eq!(slots.slot(SearchType::Ip).phase, SearchPhase::Loading);
    }

    #[test]
    fn test_view_search_type_mapping() {
        for ty in SearchType::ALL {
            assert_eq!(View::for_search(ty).search_type(), Some(ty));
        }
        assert_eq!(View::Statistics.search_type(), None);
    }

    #[test]
    fn test_history_recompute_applies_both_filters() {
        let entry = |ty: SearchType, rep: ReputationLevel, target: &str| HistoryEntry {
            search_type: ty,
            target: target.to_string(),
            reputation: rep,
            timestamp: "2024-03-01T12:00:00Z".to_string(),
            country: None,
        };
        let mut history = HistoryViewState {
            entries: vec![
                entry(SearchType::Ip, ReputationLevel::Malicious, "1.1.1.1"),
                entry(SearchType::Domain, ReputationLevel::Malicious, "a.com"),
                entry(SearchType::Ip, ReputationLevel::Clean, "2.2.2.2"),
                entry(SearchType::Ip, ReputationLevel::Malicious, "3.3.3.3"),
            ],
            type_filter: Filter::Only(SearchType::Ip),
            reputation_filter: Filter::Only(ReputationLevel::Malicious),
            ..Default::default()
        };
        history.recompute(Utc::now());
        let targets: Vec<&str> = history.visible.iter().map(|c| c.target.as_str()).collect();
        assert_eq!(targets, ["1.1.1.1", "3.3.3.3"]);

        // relaxing back to All restores everything, from local data
        history.type_filter = Filter::All;
        history.reputation_filter = Filter::All;
        history.recompute(Utc::now());
        assert_eq!(history.visible.len(), 4);
    }

    #[test]
    fn test_config_configured_count() {
        let mut config = ConfigViewState::default();
        config.sources.insert(
            "virustotal".to_string(),
            ConfigSourceStatus {
                configured: true,
                source: None,
            },
        );
        config.sources.insert(
            "abuseipdb".to_string(),
            ConfigSourceStatus {
                configured: false,
                source: None,
            },
        );
        assert_eq!(config.configured_count(), 1);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
