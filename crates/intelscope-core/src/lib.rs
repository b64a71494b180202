//! # intelscope-core - Core Domain Types
//!
//! Foundation crate for Intelscope. Provides the domain vocabulary of the
//! threat-intelligence dashboard, error handling, input validation, and
//! country normalization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SearchType`] - Category of a search target (Domain, Ip, Hash)
//! - [`ReputationLevel`] - Categorical verdict with fixed emoji/CSS presentation
//! - [`SourceStatus`] - Per-source finding status driving bucket assignment
//! - [`HistoryEntry`] - One row of the search history
//! - [`ConfigSourceStatus`], [`ConfigOrigin`] - Source configuration state
//!
//! ### Validation (`validate`)
//! - [`validate_domain()`], [`validate_ip()`], [`validate_hash()`] - Structural checks
//! - [`cue_for()`] - Live input cue ([`ValidationCue`]) for a search box
//! - [`detect_type()`] - Best-effort indicator classification
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Countries (`country`)
//! - [`CountryResolver`], [`StaticCountryTable`] - Threat-map key normalization
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use intelscope_core::prelude::*;
//! ```

pub mod country;
pub mod error;
pub mod logging;
pub mod types;
pub mod validate;

/// Prelude for common imports used throughout all Intelscope crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use country::{CountryResolver, StaticCountryTable};
pub use error::{Error, Result, ResultExt, GENERIC_ANALYSIS_ERROR};
pub use types::{
    parse_timestamp, ConfigOrigin, ConfigSourceStatus, HistoryEntry, ReputationLevel, SearchType,
    SourceStatus,
};
pub use validate::{
    cue_for, detect_type, validate, validate_domain, validate_hash, validate_ip, ValidationCue,
};
