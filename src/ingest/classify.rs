use serde_json::Value;

use crate::JsonMap;
use crate::error::PwError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiErrorKind {
    InvalidKey,
    KeyLimited,
    InvalidRequest,
}

/// Every in-band error message the server is known to send, verbatim.
/// Matching is exact and case-sensitive; the set is externally dictated.
const API_ERROR_TABLE: &[(&str, ApiErrorKind)] = &[
    ("Invalid API key.", ApiErrorKind::InvalidKey),
    ("No API key was provided.", ApiErrorKind::InvalidKey),
    (
        "Exceeded max request limit of 2000 for today.",
        ApiErrorKind::KeyLimited,
    ),
    (
        "Exceeded max request limit of 5000 for today.",
        ApiErrorKind::KeyLimited,
    ),
    ("War does not exist.", ApiErrorKind::InvalidRequest),
    ("Alliance does not exist.", ApiErrorKind::InvalidRequest),
    ("Alliance doesn't exist.", ApiErrorKind::InvalidRequest),
    ("Nation doesn't exist.", ApiErrorKind::InvalidRequest),
    ("City doesn't exist.", ApiErrorKind::InvalidRequest),
];

/// Inspects a parsed payload for an in-band error signal.
///
/// Most endpoints key errors to `general_message`, a few to `error`; the
/// first field present wins. A message outside the known table still fails,
/// as `UnrecognizedApi`, so new server messages surface instead of passing
/// through as data.
pub fn validate_api_data(data: &JsonMap) -> Result<(), PwError> {
    let signal = data
        .get("general_message")
        .or_else(|| data.get("error"));
    let Some(value) = signal else {
        return Ok(());
    };

    let message = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let kind = API_ERROR_TABLE
        .iter()
        .find(|(known, _)| *known == message)
        .map(|(_, kind)| *kind);

    Err(match kind {
        Some(ApiErrorKind::InvalidKey) => PwError::InvalidKey(message),
        Some(ApiErrorKind::KeyLimited) => PwError::KeyLimited(message),
        Some(ApiErrorKind::InvalidRequest) => PwError::InvalidRequest(message),
        None => PwError::UnrecognizedApi(message),
    })
}
