use log::debug;

use crate::error::PwError;

/// How many parse-and-correct rounds to run before giving up on a payload.
const REPAIR_ATTEMPTS: u32 = 5;

/// Attempts to coerce malformed JSON text into valid JSON.
///
/// This is a heuristic, not a general repair algorithm: it only handles the
/// two malformations this API has actually been observed to emit — trailing
/// garbage after a complete document, and doubled item separators. Anything
/// else (an HTML error page, say) fails on the first attempt with the
/// parser's error.
pub fn fix_json(text: &str) -> Result<String, PwError> {
    let mut text = text.to_string();
    let mut last_error = String::new();

    for attempt in 0..REPAIR_ATTEMPTS {
        let err = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(_) => return Ok(text),
            Err(err) => err,
        };
        let message = err.to_string();
        debug!("repair attempt {}: {}", attempt + 1, message);

        if message.starts_with("trailing characters") {
            // The extra data is always irrelevant to the API call; slice it off
            let end = byte_offset(&text, err.line(), err.column());
            text.truncate(end);
        } else if message.starts_with("key must be a string") {
            // Caused by some endpoints separating properties with double commas
            text = text.replace(",,", ",");
        } else {
            return Err(PwError::JsonRepair(format!(
                "unexpected error in returned JSON: {message}"
            )));
        }
        last_error = message;
    }

    Err(PwError::JsonRepair(format!(
        "couldn't fix bad JSON, last error was: {last_error}"
    )))
}

/// Converts serde_json's 1-based line/column error position into a byte
/// offset into `text`. Columns count bytes since the last newline.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, content) in text.split('\n').enumerate() {
        if idx + 1 == line {
            return (offset + column.saturating_sub(1)).min(text.len());
        }
        offset += content.len() + 1;
    }
    text.len()
}
