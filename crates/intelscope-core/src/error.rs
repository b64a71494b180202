//! Application error types with the transport/contract taxonomy

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fallback message shown when the backend gives no usable error text.
pub const GENERIC_ANALYSIS_ERROR: &str = "Analysis request failed";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Transport Errors (network failure, timeouts, non-2xx without body)
    // ─────────────────────────────────────────────────────────────
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A non-2xx response carrying a server-supplied `{error}` message.
    #[error("API error: {message}")]
    Api { message: String },

    // ─────────────────────────────────────────────────────────────
    // Contract Errors (2xx response missing required fields)
    // ─────────────────────────────────────────────────────────────
    #[error("Backend contract violation: {message}")]
    Contract { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Every search/aggregate failure is recoverable: it lands in a visible
    /// per-view error state and never terminates the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::Api { .. }
                | Error::Contract { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// The message to surface to the user for a failed search.
    ///
    /// Server-supplied and contract messages pass through verbatim; anything
    /// else collapses to the generic fallback so raw transport detail never
    /// reaches the badge area.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message } | Error::Contract { message } => message.clone(),
            _ => GENERIC_ANALYSIS_ERROR.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::api("Invalid IP");
        assert_eq!(err.to_string(), "API error: Invalid IP");

        let err = Error::contract("missing overall_reputation");
        assert!(err.to_string().contains("contract violation"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::transport("connection refused").is_recoverable());
        assert!(Error::api("Invalid IP").is_recoverable());
        assert!(Error::contract("missing field").is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
    }

    #[test]
    fn test_user_message_passes_server_text_through() {
        assert_eq!(Error::api("Invalid IP").user_message(), "Invalid IP");
        assert_eq!(
            Error::contract("missing overall_reputation").user_message(),
            "missing overall_reputation"
        );
    }

    #[test]
    fn test_user_message_generic_for_transport() {
        let err = Error::transport("dns lookup failed: everything is on fire");
        assert_eq!(err.user_message(), GENERIC_ANALYSIS_ERROR);
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::transport("test");
        let _ = Error::api("test");
        let _ = Error::contract("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
    }
}
