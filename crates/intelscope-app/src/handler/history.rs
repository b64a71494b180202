//! History view handlers

use chrono::Utc;

use intelscope_api::StatisticsResponse;
use intelscope_core::{ReputationLevel, SearchType};

use crate::message::Filter;
use crate::state::{AppState, FetchPhase, NoticeKind};

use super::UpdateResult;

pub fn handle_loaded(state: &mut AppState, resp: StatisticsResponse) -> UpdateResult {
    state.history.entries = resp.recent_searches;
    state.history.phase = FetchPhase::Loaded;
    state.history.recompute(Utc::now());
    UpdateResult::none()
}

pub fn set_type_filter(state: &mut AppState, filter: Filter<SearchType>) -> UpdateResult {
    state.history.type_filter = filter;
    state.history.recompute(Utc::now());
    UpdateResult::none()
}

pub fn set_reputation_filter(
    state: &mut AppState,
    filter: Filter<ReputationLevel>,
) -> UpdateResult {
    state.history.reputation_filter = filter;
    state.history.recompute(Utc::now());
    UpdateResult::none()
}

/// Drop the locally held entries. Server-side history is untouched; the
/// next fetch repopulates the view.
pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.history.entries.clear();
    state.history.recompute(Utc::now());
    state.notify(NoticeKind::Success, "History cleared");
    UpdateResult::none()
}
