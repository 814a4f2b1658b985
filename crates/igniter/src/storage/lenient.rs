//! Field decoding for records written by other hands.
//!
//! Stored text fields are usually strings, but hand-edited or older data may
//! hold numbers, booleans or `null` instead. Those are read as their JSON text
//! (`null` as the empty string). Arrays and objects are still rejected.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a text field, accepting any JSON scalar
pub(crate) fn text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => {
            return Err(de::Error::custom(format!(
                "expected text, found {}",
                kind(&other)
            )));
        }
    };
    Ok(T::from(text))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        _ => "a scalar",
    }
}
