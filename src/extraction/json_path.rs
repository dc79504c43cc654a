//! JSON path resolution.
//!
//! Resolves dot-notation paths like "jobPlanning.nrcJobNo" to values in JSON.

use serde_json::Value;

/// Resolve a dot-notation path to a value in JSON.
///
/// # Examples
/// ```
/// use printlens_core::extraction::resolve_json_path;
/// use serde_json::json;
/// let data = json!({"jobPlanning": {"nrcJobNo": "JOB-7"}});
/// let value = resolve_json_path(&data, "jobPlanning.nrcJobNo");
/// assert_eq!(value, Some(&json!("JOB-7")));
/// ```
pub fn resolve_json_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(data, |node, segment| step_into(node, segment))
}

/// Descend one segment: a key into an object, an index into an array.
fn step_into<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Whether a resolved value counts as missing.
///
/// `null` and blank strings are treated the same as an absent key.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Resolve a path, treating absent values as `None`.
pub fn resolve_present<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_json_path(data, path).filter(|v| !is_absent(v))
}

/// Convert a JSON value to a string representation.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(), // Arrays and objects as JSON strings
    }
}

/// Convert a JSON value to an integer if possible.
///
/// Fractional numbers are truncated toward zero. Booleans are not counts
/// and do not coerce.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

/// Convert a JSON value to a boolean if possible.
pub fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_path() {
        let data = json!({"stepName": "PrintingDetails"});
        assert_eq!(
            resolve_json_path(&data, "stepName"),
            Some(&json!("PrintingDetails"))
        );
    }

    #[test]
    fn test_nested_path() {
        let data = json!({
            "jobPlanning": {
                "nrcJobNo": "JOB-1",
                "jobDemand": "high"
            }
        });
        assert_eq!(
            resolve_json_path(&data, "jobPlanning.jobDemand"),
            Some(&json!("high"))
        );
    }

    #[test]
    fn test_array_index() {
        let data = json!({
            "machineDetails": [
                {"machineId": "M-01"},
                {"machineId": "M-02"}
            ]
        });
        assert_eq!(
            resolve_json_path(&data, "machineDetails.0.machineId"),
            Some(&json!("M-01"))
        );
        assert_eq!(
            resolve_json_path(&data, "machineDetails.1.machineId"),
            Some(&json!("M-02"))
        );
        assert_eq!(resolve_json_path(&data, "machineDetails.2.machineId"), None);
    }

    #[test]
    fn test_missing_path() {
        let data = json!({"name": "test"});
        assert_eq!(resolve_json_path(&data, "missing"), None);
        assert_eq!(resolve_json_path(&data, "name.nested"), None);
    }

    #[test]
    fn test_empty_path() {
        let data = json!({"name": "test"});
        assert_eq!(resolve_json_path(&data, ""), Some(&data));
    }

    #[test]
    fn test_numeric_segment_on_object_is_a_key() {
        let data = json!({"machineDetails": {"0": "PR-03"}, "list": ["a"]});
        assert_eq!(resolve_json_path(&data, "machineDetails.0"), Some(&json!("PR-03")));
        assert_eq!(resolve_json_path(&data, "list.first"), None);
        assert_eq!(resolve_json_path(&data, "list.0.deeper"), None);
    }

    #[test]
    fn test_absent_values() {
        let data = json!({"a": null, "b": "  ", "c": 0, "d": "x"});
        assert!(resolve_present(&data, "a").is_none());
        assert!(resolve_present(&data, "b").is_none());
        assert_eq!(resolve_present(&data, "c"), Some(&json!(0)));
        assert_eq!(resolve_present(&data, "d"), Some(&json!("x")));
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(value_to_int(&json!(42)), Some(42));
        assert_eq!(value_to_int(&json!("17")), Some(17));
        assert_eq!(value_to_int(&json!(12.9)), Some(12));
        assert_eq!(value_to_int(&json!("abc")), None);
        assert_eq!(value_to_int(&json!(true)), None);
        assert_eq!(value_to_int(&json!(false)), None);
        assert_eq!(value_to_bool(&json!(true)), Some(true));
        assert_eq!(value_to_bool(&json!("true")), Some(true));
        assert_eq!(value_to_bool(&json!(1)), Some(true));
        assert_eq!(value_to_string(&json!(7)), "7");
    }
}
