//! Resource client errors.

/// Errors raised by the resource client and its transport.
///
/// None of these trigger an automatic retry; every failure is surfaced to
/// the caller, which decides whether to show an error screen or abort.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status. The message is taken
    /// from the standard `{"error":{"code","message"}}` envelope, or the raw
    /// body when the envelope does not parse.
    #[error("{0}")]
    Remote(String),

    /// The request never produced a response (connection failure, timeout,
    /// invalid URL).
    #[error("request failed: {0}")]
    Transport(String),

    /// Malformed JSON on encode or decode.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
