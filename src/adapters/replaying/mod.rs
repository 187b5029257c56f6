//! Replaying adapters that replay recorded interactions.

pub mod analysis;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

pub use analysis::ReplayingAnalysisService;

/// Pull the output of the next recorded interaction for `port::method`.
///
/// # Errors
///
/// Returns an error if the replayer is exhausted or its lock is poisoned.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, String> {
    let mut guard = replayer.lock().map_err(|_| "replayer lock poisoned".to_string())?;
    let interaction = guard.next_interaction(port, method)?;
    Ok(interaction.output.clone())
}

/// Decode a recorded `Result<T, E>` using the Ok/Err JSON convention.
///
/// Mirror of `recording::record_result`. An `{"Err": msg}` output yields
/// `Err(msg)`; so does an output that fits neither shape.
pub(crate) fn replay_result<T>(output: serde_json::Value) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if let Some(value) = output.get("Ok") {
        return serde_json::from_value(value.clone())
            .map_err(|e| format!("Recorded Ok value does not decode: {e}"));
    }
    match output.get("Err") {
        Some(serde_json::Value::String(message)) => Err(message.clone()),
        _ => Err(format!("Recorded output is neither Ok nor Err: {output}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replay_result_decodes_both_arms() {
        let ok: Result<u32, String> = replay_result(json!({"Ok": 5}));
        assert_eq!(ok, Ok(5));
        let err: Result<u32, String> = replay_result(json!({"Err": "boom"}));
        assert_eq!(err, Err("boom".into()));
    }

    #[test]
    fn replay_result_rejects_unknown_shape() {
        let res: Result<u32, String> = replay_result(json!({"ok": 5}));
        assert!(res.unwrap_err().contains("neither Ok nor Err"));
    }
}
