//! Chart and threat-map view models for the statistics view
//!
//! Charts are plain data descriptions (labels, series, colors, theme
//! options) that a frontend can hand to its plotting layer. Labels and
//! palette are fixed; only the counts and the theme-dependent options
//! vary. A theme change restyles the options of live charts in place,
//! the series are never rebuilt for it.

use intelscope_api::{ReputationCounts, SummaryCounts};
use intelscope_core::{CountryResolver, StaticCountryTable};

use crate::state::Theme;

/// Theme-dependent chart options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub legend_color: &'static str,
    pub tick_color: &'static str,
}

impl ChartOptions {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => ChartOptions {
                legend_color: "#1e293b",
                tick_color: "#475569",
            },
            Theme::Dark => ChartOptions {
                legend_color: "#f1f5f9",
                tick_color: "#94a3b8",
            },
        }
    }
}

/// Reputation distribution doughnut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoughnutChart {
    pub labels: [&'static str; 3],
    pub values: [u64; 3],
    pub colors: [&'static str; 3],
    pub options: ChartOptions,
}

impl DoughnutChart {
    pub fn reputation(counts: &ReputationCounts, theme: Theme) -> Self {
        Self {
            labels: ["Malicious", "Suspicious", "Clean"],
            values: [counts.malicious, counts.suspicious, counts.clean],
            colors: ["#ef4444", "#f59e0b", "#10b981"],
            options: ChartOptions::for_theme(theme),
        }
    }

    pub fn restyle(&mut self, theme: Theme) {
        self.options = ChartOptions::for_theme(theme);
    }
}

/// Searches-per-type bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub labels: [&'static str; 3],
    pub values: [u64; 3],
    pub colors: [&'static str; 3],
    pub options: ChartOptions,
}

impl BarChart {
    pub fn search_types(summary: &SummaryCounts, theme: Theme) -> Self {
        Self {
            labels: ["Domains", "IPs", "Hashes"],
            values: [summary.domains, summary.ips, summary.hashes],
            colors: ["#3b82f6", "#10b981", "#f59e0b"],
            options: ChartOptions::for_theme(theme),
        }
    }

    pub fn restyle(&mut self, theme: Theme) {
        self.options = ChartOptions::for_theme(theme);
    }
}

/// Threat intensity tier, relative to the busiest region in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatTier {
    /// Classify by the share of the maximum count. Boundaries are
    /// exclusive, so a share of exactly 0.4 is still `Medium`.
    pub fn classify(count: u64, max_count: u64) -> Self {
        if max_count == 0 {
            return ThreatTier::Low;
        }
        let intensity = count as f64 / max_count as f64;
        if intensity > 0.7 {
            ThreatTier::Critical
        } else if intensity > 0.4 {
            ThreatTier::High
        } else if intensity > 0.2 {
            ThreatTier::Medium
        } else {
            ThreatTier::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThreatTier::Critical => "#ef4444",
            ThreatTier::High => "#f59e0b",
            ThreatTier::Medium => "#fbbf24",
            ThreatTier::Low => "#10b981",
        }
    }
}

/// One region of the threat map, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatRegion {
    /// Canonical country code for intensity lookups.
    pub code: String,
    pub display_name: String,
    pub count: u64,
    pub tier: ThreatTier,
    /// Fraction of the maximum count, in `0.0..=1.0`.
    pub share: f64,
}

/// The threat-map view: either an explanatory empty state or the regions
/// in payload order.
#[derive(Debug, Clone, PartialEq)]
pub enum ThreatMapView {
    /// No country data yet; the view explains how data accumulates.
    Empty,
    Map {
        regions: Vec<ThreatRegion>,
        max_count: u64,
    },
}

impl ThreatMapView {
    pub fn build(threats: &[(String, u64)]) -> Self {
        let max_count = threats.iter().map(|(_, n)| *n).max().unwrap_or(0);
        if threats.is_empty() || max_count == 0 {
            return ThreatMapView::Empty;
        }

        let table = StaticCountryTable;
        let regions = threats
            .iter()
            .map(|(key, count)| ThreatRegion {
                code: table.canonical_code(key).unwrap_or(key).to_string(),
                display_name: table.display_name(key),
                count: *count,
                tier: ThreatTier::classify(*count, max_count),
                share: *count as f64 / max_count as f64,
            })
            .collect();

        ThreatMapView::Map { regions, max_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reputation_chart_fixed_palette() {
        let counts = ReputationCounts {
            clean: 25,
            suspicious: 10,
            malicious: 7,
            ..Default::default()
        };
        let chart = DoughnutChart::reputation(&counts, Theme::Light);
        assert_eq!(chart.labels, ["Malicious", "Suspicious", "Clean"]);
        assert_eq!(chart.values, [7, 10, 25]);
        assert_eq!(chart.colors, ["#ef4444", "#f59e0b", "#10b981"]);
    }

    #[test]
    fn test_bar_chart_values_follow_summary() {
        let summary = SummaryCounts {
            total: 42,
            domains: 30,
            ips: 8,
            hashes: 4,
        };
        let chart = BarChart::search_types(&summary, Theme::Dark);
        assert_eq!(chart.values, [30, 8, 4]);
        assert_eq!(chart.colors, ["#3b82f6", "#10b981", "#f59e0b"]);
    }

    #[test]
    fn test_restyle_keeps_series() {
        let counts = ReputationCounts::default();
        let mut chart = DoughnutChart::reputation(&counts, Theme::Light);
        let before = chart.values;
        chart.restyle(Theme::Dark);
        assert_eq!(chart.values, before);
        assert_eq!(chart.options, ChartOptions::for_theme(Theme::Dark));
    }

    #[test]
    fn test_tier_boundaries() {
        // boundaries are exclusive
        assert_eq!(ThreatTier::classify(4, 10), ThreatTier::Medium);
        assert_eq!(ThreatTier::classify(7, 10), ThreatTier::High);
        assert_eq!(ThreatTier::classify(2, 10), ThreatTier::Low);
        assert_eq!(ThreatTier::classify(8, 10), ThreatTier::Critical);
        assert_eq!(ThreatTier::classify(10, 10), ThreatTier::Critical);
        assert_eq!(ThreatTier::classify(0, 10), ThreatTier::Low);
    }

    #[test]
    fn test_tier_zero_max_is_low() {
        assert_eq!(ThreatTier::classify(0, 0), ThreatTier::Low);
    }

    #[test]
    fn test_threat_map_empty_state() {
        assert_eq!(ThreatMapView::build(&[]), ThreatMapView::Empty);
        let zeros = vec![("US".to_string(), 0)];
        assert_eq!(ThreatMapView::build(&zeros), ThreatMapView::Empty);
    }

    #[test]
    fn test_threat_map_regions() {
        let threats = vec![
            ("US".to_string(), 12),
            ("Russia".to_string(), 9),
            ("CN".to_string(), 3),
        ];
        let ThreatMapView::Map { regions, max_count } = ThreatMapView::build(&threats) else {
            panic!("expected a populated map");
        };
        assert_eq!(max_count, 12);
        assert_eq!(regions[0].display_name, "US (United States)");
        assert_eq!(regions[0].tier, ThreatTier::Critical);
        assert_eq!(regions[1].code, "RU");
        assert_eq!(regions[1].display_name, "Russia");
        assert_eq!(regions[1].tier, ThreatTier::Critical);
        assert_eq!(regions[2].tier, ThreatTier::Medium);
    }
}
