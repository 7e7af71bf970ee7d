//! Wire envelopes for list responses and server errors.

use serde::Deserialize;

/// A collection page as the server sends it: the records under `value` and
/// an optional continuation link. An absent or empty link means the final
/// page.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<R> {
    #[serde(rename = "@odata.nextLink", default)]
    pub next_link: Option<String>,
    #[serde(rename = "value")]
    pub records: Vec<R>,
}

/// The standard error envelope: `{"error":{"code","message"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    #[serde(default)]
    code: String,
    message: String,
}

/// Extract the server's error message from a response body. Falls back to
/// the body text verbatim when the envelope does not parse.
pub fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
