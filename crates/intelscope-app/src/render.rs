//! Presentation helpers shared by result cards and history rows

use chrono::{DateTime, Utc};
use serde_json::Value;

use intelscope_core::{parse_timestamp, HistoryEntry, ReputationLevel, SearchType};

/// One labelled line inside a detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Turn a snake_case wire key into a display label
/// (`"total_reports"` becomes `"Total Reports"`).
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a JSON value for display. Nulls, empty strings, and empty
/// arrays yield `None` and their row is dropped; arrays join with `", "`.
pub fn value_to_display(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_display).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

/// Build display rows from a wire detail object, preserving key order.
///
/// The same routine serves per-source details on domain results and the
/// info sections of IP results, so both render identically.
pub fn detail_rows(map: &serde_json::Map<String, Value>) -> Vec<DetailRow> {
    map.iter()
        .filter_map(|(key, value)| {
            value_to_display(value).map(|value| DetailRow {
                label: humanize_key(key),
                value,
            })
        })
        .collect()
}

/// Coarse relative-time bucket for a history timestamp.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let seconds = diff.num_seconds();
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

/// Fully rendered history card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCard {
    pub icon: &'static str,
    pub type_label: &'static str,
    pub target: String,
    pub reputation: ReputationLevel,
    pub relative_time: String,
    pub timestamp: String,
    pub country: Option<String>,
}

impl HistoryCard {
    pub fn from_entry(entry: &HistoryEntry, now: DateTime<Utc>) -> Self {
        let (relative, stamp) = match parse_timestamp(&entry.timestamp) {
            Some(then) => (
                relative_time(then, now),
                then.format("%Y-%m-%d %H:%M").to_string(),
            ),
            // unparseable timestamps fall back to the raw string
            None => (entry.timestamp.clone(), entry.timestamp.clone()),
        };
        Self {
            icon: entry.search_type.icon(),
            type_label: entry.search_type.label(),
            target: entry.target.clone(),
            reputation: entry.reputation,
            relative_time: relative,
            timestamp: stamp,
            country: entry.country.clone(),
        }
    }

    /// Clipboard text for the card's copy button.
    pub fn copy_text(&self) -> String {
        format!(
            "Type: {}\nTarget: {}\nReputation: {}",
            self.type_label,
            self.target,
            self.reputation.badge_label()
        )
    }
}

/// One row of the recent-searches list on the statistics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearchRow {
    pub icon: &'static str,
    pub target: String,
    pub search_type: SearchType,
    pub reputation: ReputationLevel,
    pub relative_time: String,
}

impl RecentSearchRow {
    pub fn from_entry(entry: &HistoryEntry, now: DateTime<Utc>) -> Self {
        let relative = parse_timestamp(&entry.timestamp)
            .map(|then| relative_time(then, now))
            .unwrap_or_else(|| entry.timestamp.clone());
        Self {
            icon: entry.search_type.icon(),
            target: entry.target.clone(),
            search_type: entry.search_type,
            reputation: entry.reputation,
            relative_time: relative,
        }
    }
}
