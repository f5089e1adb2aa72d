use thiserror::Error;

/// Engine-level error type.
///
/// The taxonomy is deliberately small: the engine is computation-only, so the
/// only per-request failure is unusable input text. Configuration problems
/// are construction-time failures and never surface per request. Unknown
/// field or role keys are *not* errors — they resolve to a documented
/// fallback that is signaled in the result.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Resume text is empty or too short to analyze meaningfully.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration invariant was violated while building a registry or
    /// the engine (overlapping taxonomy variants, weight tables not summing
    /// to 1.0, a missing default field). Raised at startup only.
    #[error("configuration invariant violated: {0}")]
    Config(String),

    /// A registry payload could not be deserialized.
    #[error("malformed registry payload: {0}")]
    Payload(#[from] serde_json::Error),
}
