//! Shared test utilities for the inicheck workspace.
//!
//! Golden-file tests in more than one crate compare reports, so normalization lives here rather
//! than in a `#[cfg(test)]` module.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, but only when the *root* object looks like a report
///   envelope (`schema`, `tool`, `verdict`, `issues`). Nested look-alikes are left alone.
/// - `started_at` / `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("issues");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps(&mut value);
    value
}

fn normalize_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps(val);
            }
        }
        _ => {}
    }
}
