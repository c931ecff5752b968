use thiserror::Error;

/// Everything that can go wrong between issuing a request and handing a
/// caller a constructed entity. In-band API errors (`InvalidKey`,
/// `KeyLimited`, `InvalidRequest`, `UnrecognizedApi`) arrive inside an
/// HTTP 200 payload and are surfaced from the classifier; the rest are
/// transport, parsing, or normalization failures.
#[derive(Debug, Error)]
pub enum PwError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}")]
    Http { status: u16 },

    #[error("{0}")]
    JsonRepair(String),

    #[error("expected a JSON object payload, got: {0}")]
    UnexpectedPayload(String),

    #[error("invalid API key: {0}")]
    InvalidKey(String),

    #[error("API key rate limited: {0}")]
    KeyLimited(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unrecognized API error: {0}")]
    UnrecognizedApi(String),

    #[error("could not resolve field `{field}`: {reason}")]
    FieldResolution { field: String, reason: String },
}

impl PwError {
    pub(crate) fn missing(primary: &str, fallback: Option<&str>) -> Self {
        let reason = match fallback {
            Some(fb) => format!("key missing (fallback `{fb}` also missing)"),
            None => "key missing".to_string(),
        };
        PwError::FieldResolution {
            field: primary.to_string(),
            reason,
        }
    }

    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        PwError::FieldResolution {
            field: key.to_string(),
            reason: reason.into(),
        }
    }
}
