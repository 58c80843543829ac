//! Deep merge of settings tiers.
//!
//! Higher tier values override lower tier values field by field.
//! Arrays are replaced entirely, not concatenated.

use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans, nulls are replaced entirely
/// - If overlay is null, the base value is preserved (null means "not specified")
///
/// # Example
/// ```
/// use serde_json::json;
/// use publication_io::config::deep_merge;
///
/// let base = json!({
///     "paths": { "publication": "data/publication.md", "env_file": ".env" },
///     "env": { "required_vars": ["OPENAI_API_KEY"] }
/// });
/// let overlay = json!({
///     "paths": { "env_file": ".env.local" },
///     "env": { "required_vars": ["ANTHROPIC_API_KEY"] }
/// });
/// let result = deep_merge(base, overlay);
/// assert_eq!(result["paths"]["publication"], "data/publication.md");
/// assert_eq!(result["paths"]["env_file"], ".env.local");
/// assert_eq!(result["env"]["required_vars"], json!(["ANTHROPIC_API_KEY"]));
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        // A tier that leaves a key empty does not clear it
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Merge multiple values in order, with later values taking precedence.
///
/// Equivalent to folding `deep_merge` over the list.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}
