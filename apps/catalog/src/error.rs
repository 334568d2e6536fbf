use thiserror::Error;

/// Failure of a single catalog fetch. Every variant reaches the user the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Error: {status_text}")]
    RequestFailed { status: u16, status_text: String },

    #[error("{0}")]
    ParseFailed(String),

    #[error("{0}")]
    NetworkFailure(String),
}

impl FetchError {
    /// Builds a `RequestFailed`, falling back to the reason phrase when the
    /// server sent an empty status text (HTTP/2 never carries one).
    pub fn request_failed(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.trim().is_empty() {
            reason_phrase(status).map_or_else(|| status.to_string(), str::to_string)
        } else {
            status_text.to_string()
        };

        Self::RequestFailed {
            status,
            status_text,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseFailed(error.to_string())
    }
}

/// Failure to attach the page wiring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("trigger element `{0}` not found")]
    MissingTrigger(String),

    #[error("display region `{0}` not found")]
    MissingRegion(String),

    #[error("failed to attach listener to `{id}`: {reason}")]
    Listener { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("Music playback failed: {0}")]
    Playback(String),
}

const fn reason_phrase(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Bad Request"),
        401 => Some("Unauthorized"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        408 => Some("Request Timeout"),
        429 => Some("Too Many Requests"),
        500 => Some("Internal Server Error"),
        502 => Some("Bad Gateway"),
        503 => Some("Service Unavailable"),
        504 => Some("Gateway Timeout"),
        _ => None,
    }
}
