//! Messages driving the update loop

use intelscope_api::{CheckResponse, ConfigStatusResponse, StatisticsResponse};
use intelscope_core::{ReputationLevel, SearchType};

use crate::state::{Theme, View};

/// Filter selector with an explicit all-pass sentinel, matching the
/// dropdowns on the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

/// Why a statistics fetch was issued. The same endpoint feeds both the
/// statistics view and the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPurpose {
    Statistics,
    History,
}

/// All messages the update loop can process
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the visible view; entering stats/history/config triggers a fetch
    ActivateView(View),

    /// Search box contents changed; recomputes the validation cue
    InputChanged {
        search_type: SearchType,
        value: String,
    },

    /// Submit the current contents of a search box
    SubmitSearch(SearchType),

    /// A check completed. `seq` ties the completion to the submission
    /// that issued it; stale completions are discarded.
    SearchSucceeded {
        search_type: SearchType,
        seq: u64,
        response: CheckResponse,
    },

    /// A check failed with a user-facing message
    SearchFailed {
        search_type: SearchType,
        seq: u64,
        message: String,
    },

    /// Clear a search slot back to its idle state
    ResetSearch(SearchType),

    /// Statistics payload arrived (or failed)
    StatisticsFetched {
        purpose: StatsPurpose,
        result: Result<StatisticsResponse, String>,
    },

    /// Configuration status arrived (or failed)
    ConfigStatusFetched(Result<ConfigStatusResponse, String>),

    SetHistoryTypeFilter(Filter<SearchType>),
    SetHistoryReputationFilter(Filter<ReputationLevel>),

    /// Drop the locally held history entries
    ClearHistory,

    /// Re-run a past search from a history card
    RepeatSearch {
        search_type: SearchType,
        target: String,
    },

    /// Theme toggled; chart options are restyled in place
    ThemeChanged(Theme),

    /// Dismiss the oldest notice
    DismissNotice,
}
