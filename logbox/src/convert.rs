//!
//! JSON conversion boundary. Handlers never touch `serde_json` directly
//! for string-level work; everything goes through the installed
//! [`JsonConverter`] so an application can swap the implementation.
//!

use crate::result::Result;
use serde_json::Value;

/// Serializes JSON values to text and back. The default implementation is
/// [`SerdeConverter`]; a custom converter can be installed through
/// [`LoggerConfig::json_converter`](crate::config::LoggerConfig).
///
/// Implementations must not be assumed lenient: callers inside the render
/// pipeline catch conversion errors and degrade to plain text.
pub trait JsonConverter: Send + Sync {
    /// Renders a value as pretty-printed JSON text.
    fn to_json(&self, value: &Value) -> Result<String>;

    /// Parses JSON text back into a value.
    fn from_json(&self, json: &str) -> Result<Value>;
}

/// Nesting indent of pretty-printed JSON, in spaces.
const JSON_INDENT: usize = 2;

/// Default [`JsonConverter`] backed by `serde_json`.
pub struct SerdeConverter;

impl JsonConverter for SerdeConverter {
    fn to_json(&self, value: &Value) -> Result<String> {
        let indent = vec![b' '; JSON_INDENT];
        let mut out = Vec::with_capacity(128);
        let fmt = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
        serde::Serialize::serialize(value, &mut ser)?;
        // PrettyFormatter only ever emits valid UTF-8
        Ok(String::from_utf8(out).map_err(|e| crate::error::Error::Custom(e.to_string()))?)
    }

    fn from_json(&self, json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Whether a JSON value is a text/number/bool scalar. Maps and collections
/// use this on their first value to decide between embedding values
/// verbatim and routing each value through the converter.
pub fn is_primitive(value: &Value) -> bool {
    value.is_string() || value.is_number() || value.is_boolean()
}
