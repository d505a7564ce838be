use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::{Bundle, Content};
use crate::convert::{is_primitive, JsonConverter};
use crate::format::{Frame, BR};

use super::{reserialize, ContentHandler};

/// Extras-container payloads: a type header followed by the container's
/// entries extracted into a JSON object. A malformed entry degrades the
/// whole body to the container's display text rather than aborting the
/// log call.
pub struct BundleHandler;

impl ContentHandler for BundleHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Bundle(_))
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let bundle = match content {
            Content::Bundle(b) => b,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{}{BR}{}", std::any::type_name::<Bundle>(), frame.left());
        let body = match bundle_object(bundle, config.converter()) {
            Ok(object) => config
                .converter()
                .to_json(&Value::Object(object))
                .map(|json| frame.indent(&json))
                .unwrap_or_else(|_| frame.indent(&bundle.to_string())),
            Err(_) => frame.indent(&bundle.to_string()),
        };
        frame.wrap(&format!("{header}{body}"))
    }
}

/// Extracts the container into a JSON object: scalar values embed as-is,
/// anything else is round-tripped through the converter. Shared with the
/// intent handler for nested extras.
pub(crate) fn bundle_object(
    bundle: &Bundle,
    converter: &dyn JsonConverter,
) -> crate::result::Result<serde_json::Map<String, Value>> {
    let mut object = serde_json::Map::new();
    for (key, value) in bundle.iter() {
        let rendered = if is_primitive(value) {
            value.clone()
        } else {
            reserialize(converter, value)?
        };
        object.insert(key.to_string(), rendered);
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;

    #[test]
    fn renders_entries_as_json_object() {
        let bundle = Bundle::new().put("id", 7).put("name", "probe");
        let config = testing::config(true);
        let frame = testing::frame();
        let out = BundleHandler.render(&Content::from(bundle), &frame, &config);
        assert!(out.contains("Bundle"));
        assert!(out.contains("\"id\": 7"));
        assert!(out.contains("\"name\": \"probe\""));
    }

    #[test]
    fn nested_values_survive_extraction() {
        let bundle = Bundle::new().put("point", serde_json::json!({"x": 1, "y": 2}));
        let config = testing::config(true);
        let frame = testing::frame();
        let out = BundleHandler.render(&Content::from(bundle), &frame, &config);
        assert!(out.contains("\"x\": 1"));
    }

    #[test]
    fn plain_mode_uses_display_text() {
        let bundle = Bundle::new().put("k", 1);
        let config = testing::config(false);
        let frame = testing::frame();
        let out = BundleHandler.render_plain(&Content::from(bundle), &frame, &config);
        assert!(out.contains("Bundle[{k=1}]"));
    }
}
