//! Advisory input validation for search targets
//!
//! Validators drive the live input cue beside each search box. They are
//! advisory only: submission is blocked by emptiness, never by a failing
//! pattern, so novel-but-real indicators still reach the backend.

use std::sync::LazyLock;

use regex::Regex;

use crate::SearchType;

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .unwrap()
});

static IP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());

static HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{32}$|^[a-f0-9]{40}$|^[a-f0-9]{64}$").unwrap());

/// Visual state of the input cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationCue {
    /// Empty input, no cue shown.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Structural domain-name check. Case-insensitive; each label must be
/// 1..=63 chars of `[a-z0-9-]` not starting or ending with a hyphen, and
/// at least two labels are required.
pub fn validate_domain(input: &str) -> bool {
    DOMAIN_RE.is_match(&input.trim().to_ascii_lowercase())
}

/// IPv4 dotted-quad check. The coarse pattern admits any 1-3 digit octet;
/// each octet is then range-checked against 255.
pub fn validate_ip(input: &str) -> bool {
    let input = input.trim();
    if !IP_RE.is_match(input) {
        return false;
    }
    input
        .split('.')
        .all(|octet| octet.parse::<u16>().map(|n| n <= 255).unwrap_or(false))
}

/// Hex-digest check for MD5 (32), SHA-1 (40), and SHA-256 (64).
/// Case-insensitive.
pub fn validate_hash(input: &str) -> bool {
    HASH_RE.is_match(&input.trim().to_ascii_lowercase())
}

/// Whether `input` passes the pattern for the given search type.
///
/// The domain form also doubles as a hash entry point, so either shape
/// yields a valid cue there.
pub fn validate(search_type: SearchType, input: &str) -> bool {
    match search_type {
        SearchType::Domain => validate_domain(input) || validate_hash(input),
        SearchType::Ip => validate_ip(input),
        SearchType::Hash => validate_hash(input),
    }
}

/// Compute the cue for the current contents of a search box.
pub fn cue_for(search_type: SearchType, input: &str) -> ValidationCue {
    if input.trim().is_empty() {
        ValidationCue::Neutral
    } else if validate(search_type, input) {
        ValidationCue::Valid
    } else {
        ValidationCue::Invalid
    }
}

/// Best-effort classification of a raw indicator, used by the CLI when no
/// explicit type is given. Hash wins over domain for hex-shaped input.
pub fn detect_type(input: &str) -> SearchType {
    if validate_ip(input) {
        SearchType::Ip
    } else if validate_hash(input) {
        SearchType::Hash
    } else {
        SearchType::Domain
    }
}
