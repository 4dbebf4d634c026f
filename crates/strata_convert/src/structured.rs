//! JSON and YAML converters.

use serde_json::Value;

/// JSON to `txt` (pretty), `yaml`/`yml`; `json` and unknown targets return the source.
pub(crate) fn json(data: Vec<u8>, ext: &str) -> Result<Vec<u8>, String> {
    match ext {
        "txt" => {
            let value: Value = serde_json::from_slice(&data).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&value)
                .map(String::into_bytes)
                .map_err(|e| e.to_string())
        }
        "yaml" | "yml" => {
            let value: Value = serde_json::from_slice(&data).map_err(|e| e.to_string())?;
            serde_yaml::to_string(&value)
                .map(String::into_bytes)
                .map_err(|e| e.to_string())
        }
        _ => Ok(data),
    }
}

/// YAML to compact `json`; everything else returns the source.
///
/// `<<` merge keys are expanded before conversion.
pub(crate) fn yaml(data: Vec<u8>, ext: &str) -> Result<Vec<u8>, String> {
    if ext != "json" {
        return Ok(data);
    }
    let mut value: serde_yaml::Value = serde_yaml::from_slice(&data).map_err(|e| e.to_string())?;
    value.apply_merge().map_err(|e| e.to_string())?;
    let value: Value = serde_json::to_value(&value).map_err(|e| e.to_string())?;
    serde_json::to_vec(&value).map_err(|e| e.to_string())
}
