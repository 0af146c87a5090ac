//! Result and error types for Tantear.

use thiserror::Error;

/// Result type for Tantear operations
pub type TantearResult<T> = Result<T, TantearError>;

/// Errors that can occur in Tantear.
///
/// The core performs no local recovery: every error propagates to the
/// calling scenario. Probe operations (`is_visible`, `is_enabled`) are the
/// one exception and resolve to `false` instead of raising.
#[derive(Debug, Error)]
pub enum TantearError {
    /// An unknown selector kind name reached the parser. Programming error,
    /// always fatal, never caught internally.
    #[error("Unsupported selector kind: {kind}")]
    UnsupportedSelectorKind {
        /// The unrecognized kind name
        kind: String,
    },

    /// Select's option-resolution scheme has no rule for the outer
    /// selector's kind.
    #[error("No option addressing rule for selector kind {kind}")]
    UnsupportedOptionAddressing {
        /// The outer selector's kind name
        kind: &'static str,
    },

    /// Text-based option search matched zero candidates.
    #[error("Option with text {text:?} not found under {query}")]
    OptionNotFound {
        /// The text searched for
        text: String,
        /// Canonical query of the search scope
        query: String,
    },

    /// An action primitive could not be completed on an unready or absent
    /// element within its wait window.
    #[error("{action} failed on {query}: {message}")]
    ActionError {
        /// The action that failed (click, fill, ...)
        action: &'static str,
        /// Canonical query of the target element
        query: String,
        /// Error message
        message: String,
    },

    /// Observed state differs from expected state after waiting.
    #[error("Assertion failed on {query}: expected {expected:?}, got {actual:?}")]
    AssertionError {
        /// Canonical query of the asserted element
        query: String,
        /// Expected observable state
        expected: String,
        /// Actual observable state
        actual: String,
    },

    /// A visibility/state wait exceeded its bound.
    #[error("Timed out after {ms}ms waiting for {condition}")]
    Timeout {
        /// The elapsed bound in milliseconds
        ms: u64,
        /// The condition that never held
        condition: String,
    },

    /// JSON error (selector wire form)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
