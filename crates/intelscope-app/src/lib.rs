//! # intelscope-app - Application State and Update Loop
//!
//! The orchestration layer of the dashboard. State lives in [`AppState`];
//! every change flows through [`handler::update`] as a [`Message`], and
//! side effects come back as [`handler::UpdateAction`] values the
//! [`Engine`] executes on background tasks.
//!
//! ## Flow
//!
//! ```text
//! Message ──> update(state, msg) ──> UpdateResult { message?, action? }
//!                                          │            │
//!                    follow-up message <───┘            └──> spawned fetch
//!                                                                 │
//!                    completion Message <─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The model: search slots, view states, notices, theme
//! - [`message`] - Every message the update loop processes
//! - [`handler`] - The update function and per-view handlers
//! - [`normalize`] - Wire payloads to typed analysis view models
//! - [`render`] - Detail rows, history cards, relative timestamps
//! - [`charts`] - Chart datasets and the threat map
//! - [`settings`] - Config file loading
//! - [`engine`] - Async driver tying it all together

pub mod charts;
pub mod engine;
pub mod handler;
pub mod message;
pub mod normalize;
pub mod render;
pub mod settings;
pub mod state;

pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::{Filter, Message, StatsPurpose};
pub use normalize::{normalize, AnalysisResult, DomainAnalysis, InfoCard, IpAnalysis, SourceCard};
pub use settings::Settings;
pub use state::{
    AppState, FetchPhase, Notice, NoticeKind, SearchPhase, SearchState, Theme, View,
};
