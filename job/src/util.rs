use follow_graph_core::NodeId;
use serde_json::Value;
use tracing::warn;

/// Read a JSON integer as a node id. Floats, strings and out-of-range values are rejected.
pub fn as_node_id(value: &Value) -> Option<NodeId> {
    value.as_i64()
}

/// Read an optional integer field. A present but non-integer value is
/// warned about and treated as absent.
pub fn optional_int(object: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    match object.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => {
            let parsed = v.as_i64();
            if parsed.is_none() {
                warn!(field = key, value = %v, "ignoring non-integer field");
            }
            parsed
        }
    }
}

/// Convert a level parameter to u32, or None if it is negative or too large.
pub fn check_non_negative(value: i64, param_name: &str) -> Option<u32> {
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(param = param_name, value, "level parameter out of range");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_node_id() {
        assert_eq!(as_node_id(&json!(7)), Some(7));
        assert_eq!(as_node_id(&json!(-2)), Some(-2));
        assert_eq!(as_node_id(&json!(1.5)), None);
        assert_eq!(as_node_id(&json!("7")), None);
    }

    #[test]
    fn test_optional_int() {
        let obj = json!({"findId": 3, "n": "two", "z": null});
        let obj = obj.as_object().unwrap();
        assert_eq!(optional_int(obj, "findId"), Some(3));
        assert_eq!(optional_int(obj, "n"), None);
        assert_eq!(optional_int(obj, "z"), None);
        assert_eq!(optional_int(obj, "missing"), None);
    }

    #[test]
    fn test_check_non_negative() {
        assert_eq!(check_non_negative(0, "n"), Some(0));
        assert_eq!(check_non_negative(12, "n"), Some(12));
        assert_eq!(check_non_negative(-1, "n"), None);
        assert_eq!(check_non_negative(i64::MAX, "n"), None);
    }
}
