//! Main update function - handles state transitions

use intelscope_core::cue_for;

use crate::message::{Message, StatsPurpose};
use crate::state::{AppState, FetchPhase, NoticeKind, View};

use super::{history, search, stats, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::ActivateView(view) => activate_view(state, view),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChanged { search_type, value } => {
            search::handle_input_changed(state, search_type, value)
        }
        Message::SubmitSearch(search_type) => search::handle_submit(state, search_type),
        Message::SearchSucceeded {
            search_type,
            seq,
            response,
        } => search::handle_succeeded(state, search_type, seq, response),
        Message::SearchFailed {
            search_type,
            seq,
            message,
        } => search::handle_failed(state, search_type, seq, message),
        Message::ResetSearch(search_type) => search::handle_reset(state, search_type),

        // ─────────────────────────────────────────────────────────
        // View Data Messages
        // ─────────────────────────────────────────────────────────
        Message::StatisticsFetched { purpose, result } => {
            stats::handle_statistics_fetched(state, purpose, result)
        }
        Message::ConfigStatusFetched(result) => stats::handle_config_fetched(state, result),

        // ─────────────────────────────────────────────────────────
        // History Messages
        // ─────────────────────────────────────────────────────────
        Message::SetHistoryTypeFilter(filter) => history::set_type_filter(state, filter),
        Message::SetHistoryReputationFilter(filter) => {
            history::set_reputation_filter(state, filter)
        }
        Message::ClearHistory => history::handle_clear(state),
        Message::RepeatSearch {
            search_type,
            target,
        } => {
            // same path as a fresh submission: switch view, prefill, submit
            state.view = View::for_search(search_type);
            let slot = state.searches.slot_mut(search_type);
            slot.cue = cue_for(search_type, &target);
            slot.input = target.clone();
            state.notify(NoticeKind::Info, format!("Repeating search for {target}"));
            UpdateResult::message(Message::SubmitSearch(search_type))
        }

        Message::ThemeChanged(theme) => {
            state.theme = theme;
            state.settings.ui.theme = theme;
            if let Some(chart) = state.stats.reputation_chart.as_mut() {
                chart.restyle(theme);
            }
            if let Some(chart) = state.stats.type_chart.as_mut() {
                chart.restyle(theme);
            }
            UpdateResult::none()
        }

        Message::DismissNotice => {
            if !state.notices.is_empty() {
                state.notices.remove(0);
            }
            UpdateResult::none()
        }
    }
}

/// Switch the visible view. Data-backed views start their fetch on entry;
/// search views keep whatever their slot already holds.
fn activate_view(state: &mut AppState, view: View) -> UpdateResult {
    state.view = view;
    match view {
        View::Statistics => {
            state.stats.phase = FetchPhase::Loading;
            UpdateResult::action(UpdateAction::FetchStatistics {
                purpose: StatsPurpose::Statistics,
            })
        }
        View::History => {
            state.history.phase = FetchPhase::Loading;
            UpdateResult::action(UpdateAction::FetchStatistics {
                purpose: StatsPurpose::History,
            })
        }
        View::Config => {
            state.config.phase = FetchPhase::Loading;
            UpdateResult::action(UpdateAction::FetchConfigStatus)
        }
        View::Domain | View::Ip | View::Hash => UpdateResult::none(),
    }
}
