//! Statistics and config view handlers

use chrono::Utc;
use tracing::warn;

use intelscope_api::{ConfigStatusResponse, StatisticsResponse};

use crate::charts::{BarChart, DoughnutChart, ThreatMapView};
use crate::message::StatsPurpose;
use crate::render::RecentSearchRow;
use crate::state::{AppState, FetchPhase, NoticeKind};

use super::{history, UpdateResult};

pub fn handle_statistics_fetched(
    state: &mut AppState,
    purpose: StatsPurpose,
    result: Result<StatisticsResponse, String>,
) -> UpdateResult {
    match (purpose, result) {
        (StatsPurpose::Statistics, Ok(resp)) => {
            apply_statistics(state, resp);
            UpdateResult::none()
        }
        (StatsPurpose::Statistics, Err(message)) => {
            warn!(%message, "statistics fetch failed");
            state.stats.phase = FetchPhase::Error(message.clone());
            state.notify(NoticeKind::Error, message);
            UpdateResult::none()
        }
        (StatsPurpose::History, Ok(resp)) => history::handle_loaded(state, resp),
        (StatsPurpose::History, Err(message)) => {
            warn!(%message, "history fetch failed");
            state.history.phase = FetchPhase::Error(message.clone());
            state.notify(NoticeKind::Error, message);
            UpdateResult::none()
        }
    }
}

fn apply_statistics(state: &mut AppState, resp: StatisticsResponse) {
    let now = Utc::now();
    let theme = state.theme;
    let stats = &mut state.stats;

    stats.reputation_chart = Some(DoughnutChart::reputation(&resp.reputation_distribution, theme));
    stats.type_chart = Some(BarChart::search_types(&resp.summary, theme));
    stats.threat_map = Some(ThreatMapView::build(&resp.threat_map));
    stats.recent = resp
        .recent_searches
        .iter()
        .map(|e| RecentSearchRow::from_entry(e, now))
        .collect();
    stats.summary = resp.summary;
    stats.phase = FetchPhase::Loaded;
}

pub fn handle_config_fetched(
    state: &mut AppState,
    result: Result<ConfigStatusResponse, String>,
) -> UpdateResult {
    match result {
        Ok(resp) => {
            state.config.sources = resp.sources;
            state.config.phase = FetchPhase::Loaded;
        }
        Err(message) => {
            warn!(%message, "config status fetch failed");
            state.config.phase = FetchPhase::Error(message.clone());
            state.notify(NoticeKind::Error, message);
        }
    }
    UpdateResult::none()
}
