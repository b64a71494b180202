//! Handler module - update function and per-view handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `search`: Search slot lifecycle (submit, completion, staleness)
//! - `stats`: Statistics and config view handlers
//! - `history`: History filtering and local mutations

pub(crate) mod history;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod update;

use crate::message::{Message, StatsPurpose};
use intelscope_core::SearchType;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Run a reputation check in the background.
    ///
    /// `seq` is echoed back in the completion message so the handler can
    /// discard results from superseded submissions.
    FetchCheck {
        search_type: SearchType,
        value: String,
        seq: u64,
    },

    /// Fetch the statistics payload for the given consumer view
    FetchStatistics { purpose: StatsPurpose },

    /// Fetch per-source configuration state
    FetchConfigStatus,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
