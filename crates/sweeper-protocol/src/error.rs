//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum. A
//! `ProtocolError` always means the bytes or text were wrong, never that
//! the game refused a valid move.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust type).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A client command could not be parsed.
    ///
    /// Carries the offending input and a short reason, so the log line
    /// shows exactly what the client typed.
    #[error("malformed command {input:?}: {reason}")]
    MalformedCommand { input: String, reason: &'static str },
}

impl ProtocolError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        Self::MalformedCommand {
            input: input.to_string(),
            reason,
        }
    }
}
