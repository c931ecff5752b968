// Ingest module - turns a raw HTTP response into a validated payload map

pub mod classify;
pub mod repair;

use log::{debug, warn};
use serde_json::Value;

use crate::JsonMap;
use crate::client::Transport;
use crate::error::PwError;

/// Calls a given API endpoint and returns its validated payload.
///
/// Pipeline: fetch → status gate → parse (repairing malformed text once,
/// via [`repair::fix_json`]) → in-band error classification. Errors from
/// any stage propagate unchanged; there is no retry beyond the repair
/// engine's own text-processing loop.
pub async fn call_api(transport: &dyn Transport, url: &str) -> Result<JsonMap, PwError> {
    debug!("GET {url}");
    let (status, body) = transport.fetch(url).await?;
    if !(200..300).contains(&status) {
        return Err(PwError::Http { status });
    }

    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(parse_err) => {
            warn!("payload did not parse ({parse_err}), attempting repair");
            let fixed = repair::fix_json(&body)?;
            serde_json::from_str(&fixed)
                .map_err(|e| PwError::JsonRepair(format!("repaired JSON still invalid: {e}")))?
        }
    };

    let Value::Object(map) = value else {
        return Err(PwError::UnexpectedPayload(value.to_string()));
    };

    classify::validate_api_data(&map)?;
    Ok(map)
}
