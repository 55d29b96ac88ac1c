//! Additive JSON merging
//!
//! Loading a document into an existing record only overwrites what the
//! document mentions. Objects merge key by key, recursively; every other value
//! (arrays, scalars, null) replaces what was there.

use serde_json::Value;

/// Overlay `overlay` onto `base` in place.
pub fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Drop `null`s in `overlay` that would clear a non-null value in `prior`.
pub fn strip_nulls(overlay: &mut Value, prior: &Value) {
    let (Value::Object(overlay_map), Value::Object(prior_map)) = (overlay, prior) else {
        return;
    };
    overlay_map.retain(|key, value| match prior_map.get(key) {
        Some(previous) if value.is_null() => previous.is_null(),
        _ => true,
    });
    for (key, value) in overlay_map.iter_mut() {
        if let Some(previous) = prior_map.get(key) {
            strip_nulls(value, previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_are_kept() {
        let mut base = json!({"Name": "A", "Value": "B"});
        merge_json(&mut base, json!({"Name": "X"}));
        assert_eq!(base, json!({"Name": "X", "Value": "B"}));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let mut base = json!({"server": {"host": "localhost", "port": 80}, "debug": false});
        merge_json(&mut base, json!({"server": {"port": 8080}}));
        assert_eq!(base, json!({"server": {"host": "localhost", "port": 8080}, "debug": false}));
    }

    #[test]
    fn test_arrays_are_replaced_not_appended() {
        let mut base = json!({"tags": ["a", "b"]});
        merge_json(&mut base, json!({"tags": ["c"]}));
        assert_eq!(base, json!({"tags": ["c"]}));
    }

    #[test]
    fn test_non_object_overlay_replaces_whole_value() {
        let mut base = json!({"a": 1});
        merge_json(&mut base, json!([1, 2]));
        assert_eq!(base, json!([1, 2]));

        let mut base = json!({"a": "text"});
        merge_json(&mut base, json!({"a": {"b": true}}));
        assert_eq!(base, json!({"a": {"b": true}}));
    }

    #[test]
    fn test_null_overwrites() {
        let mut base = json!({"a": 1, "b": 2});
        merge_json(&mut base, json!({"a": null}));
        assert_eq!(base, json!({"a": null, "b": 2}));
    }

    #[test]
    fn test_strip_nulls_keeps_prior_values() {
        let prior = json!({"a": "keep", "b": null, "nested": {"c": 1}});
        let mut overlay = json!({"a": null, "b": null, "d": null, "nested": {"c": null, "e": 2}});
        strip_nulls(&mut overlay, &prior);
        assert_eq!(overlay, json!({"b": null, "d": null, "nested": {"e": 2}}));
    }
}
