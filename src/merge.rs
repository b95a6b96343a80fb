//! Recursive JSON value merging.
//!
//! [`update_object`] folds one [`serde_json::Value`] tree into another in
//! place: objects merge key by key, everything else overwrites. This is the
//! usual layered-configuration merge (defaults under user settings under
//! overrides) without any schema knowledge.

use serde_json::Value;

/// Human-readable type name for the verbose trace.
const fn value_type(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Recursively merge `update` into `original`, mutating `original` in place.
///
/// When both sides are objects, every key of `update` is folded in: if the
/// value under a key is an object on both sides the merge recurses,
/// otherwise `update`'s value overwrites (or inserts) — so a scalar on
/// either side wins via plain replacement. Arrays and `null` count as
/// scalars. `update` is never mutated; recursion depth equals the nesting
/// depth of `update`.
///
/// When `original` is not an object it is replaced by a clone of `update`
/// outright, so top-level scalar merges take effect too.
///
/// With `verbose` set, one `log::debug!` line per visited key records the
/// `old type --> new type` transition. Diagnostic only.
///
/// # Examples
///
/// ```
/// # use kitbag::merge::update_object;
/// # use serde_json::json;
/// let mut original = json!({"a": {"b": 1}});
/// update_object(&mut original, &json!({"a": {"c": 2}}), false);
/// assert_eq!(original, json!({"a": {"b": 1, "c": 2}}));
/// ```
pub fn update_object(original: &mut Value, update: &Value, verbose: bool) {
    if let (Value::Object(original_map), Value::Object(update_map)) = (&mut *original, update) {
        for (key, update_value) in update_map {
            if verbose {
                log::debug!(
                    "Update prop \"{key}\": ({} --> {})",
                    value_type(original_map.get(key)),
                    value_type(Some(update_value))
                );
            }

            let both_objects =
                matches!(original_map.get(key), Some(Value::Object(_))) && update_value.is_object();

            if both_objects {
                if let Some(slot) = original_map.get_mut(key) {
                    update_object(slot, update_value, verbose);
                }
            } else {
                original_map.insert(key.clone(), update_value.clone());
            }
        }
    } else {
        *original = update.clone();
    }
}

/// Returns `true` iff `value` is an object with zero keys.
///
/// Arrays, scalars and `null` are never "empty objects", even when they hold
/// nothing.
#[must_use]
pub fn is_obj_empty(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}
