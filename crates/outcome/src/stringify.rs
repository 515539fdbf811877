use serde::Serialize;
use serde_json::Value;

/// Converts `value` to text for use in an error message.
///
/// Composite values (anything serializing to a map or a sequence) become
/// compact JSON, e.g. `{"key":"value"}`. Strings are used as-is, numbers and
/// booleans use their usual text, and unit-like values become `null`.
///
/// A value that fails to serialize yields `<unserializable: {reason}>`.
pub fn stringify<T>(value: &T) -> String
where
    T: Serialize + ?Sized,
{
    let result = serde_json::to_value(value).and_then(|val| match val {
        Value::String(s) => Ok(s),
        Value::Object(..) | Value::Array(..) => serde_json::to_string(value),
        val => Ok(val.to_string()),
    });

    result.unwrap_or_else(|error| {
        log::warn!("cannot stringify value: {error}");
        format!("<unserializable: {error}>")
    })
}
