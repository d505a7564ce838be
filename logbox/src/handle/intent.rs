use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::{Content, Intent};
use crate::format::{Frame, BR};

use super::bundle::bundle_object;
use super::ContentHandler;

/// Navigation-intent payloads: a fixed field schema extracted into a
/// JSON object, with the extras container rendered through the bundle
/// extraction and embedded as pretty JSON text.
pub struct IntentHandler;

impl ContentHandler for IntentHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Intent(_))
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let intent = match content {
            Content::Intent(i) => i,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{}{BR}{}", std::any::type_name::<Intent>(), frame.left());
        let object = intent_object(intent, config);
        let body = config
            .converter()
            .to_json(&Value::Object(object))
            .map(|json| frame.indent(&json))
            .unwrap_or_else(|_| frame.indent(&intent.to_string()));
        frame.wrap(&format!("{header}{body}"))
    }
}

fn intent_object(intent: &Intent, config: &PrintConfig) -> serde_json::Map<String, Value> {
    fn opt(value: &Option<String>) -> Value {
        value
            .as_ref()
            .map(|s| Value::String(s.clone()))
            .unwrap_or(Value::Null)
    }

    let mut object = serde_json::Map::new();
    object.insert("Scheme".into(), opt(&intent.scheme));
    object.insert("Action".into(), opt(&intent.action));
    object.insert("DataString".into(), opt(&intent.data));
    object.insert("Type".into(), opt(&intent.mime_type));
    object.insert("Package".into(), opt(&intent.package));
    object.insert("ComponentInfo".into(), opt(&intent.component));
    object.insert(
        "Categories".into(),
        Value::Array(
            intent
                .categories
                .iter()
                .map(|c| Value::String(c.clone()))
                .collect(),
        ),
    );
    if let Some(extras) = &intent.extras {
        let rendered = bundle_object(extras, config.converter())
            .and_then(|object| config.converter().to_json(&Value::Object(object)))
            .unwrap_or_else(|_| "invalid extras content".to_string());
        object.insert("Extras".into(), Value::String(rendered));
    }
    object
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;
    use crate::content::Bundle;

    #[test]
    fn renders_fixed_schema() {
        let intent = Intent::new()
            .scheme("app")
            .action("VIEW")
            .data("app://detail/42")
            .category("DEFAULT");
        let config = testing::config(true);
        let frame = testing::frame();
        let out = IntentHandler.render(&Content::from(intent), &frame, &config);
        assert!(out.contains("\"Scheme\": \"app\""));
        assert!(out.contains("\"Action\": \"VIEW\""));
        assert!(out.contains("\"DataString\": \"app://detail/42\""));
        assert!(out.contains("\"Categories\""));
        // absent fields stay visible as null
        assert!(out.contains("\"Package\": null"));
    }

    #[test]
    fn extras_render_through_the_bundle_extraction() {
        let intent = Intent::new()
            .action("SEND")
            .extras(Bundle::new().put("count", 3));
        let config = testing::config(true);
        let frame = testing::frame();
        let out = IntentHandler.render(&Content::from(intent), &frame, &config);
        assert!(out.contains("Extras"));
        assert!(out.contains("count"));
    }
}
