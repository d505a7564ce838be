use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::{Content, Uri};
use crate::format::{Frame, BR};

use super::ContentHandler;

/// URI payloads: the parsed pieces extracted into a fixed JSON schema.
pub struct UriHandler;

impl ContentHandler for UriHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Uri(_))
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let uri = match content {
            Content::Uri(u) => u,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{}{BR}{}", std::any::type_name::<Uri>(), frame.left());
        let body = config
            .converter()
            .to_json(&Value::Object(uri_object(uri)))
            .map(|json| frame.indent(&json))
            .unwrap_or_else(|_| frame.indent(&uri.to_string()));
        frame.wrap(&format!("{header}{body}"))
    }

    fn render_plain(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        self.render(content, frame, config)
    }
}

fn uri_object(uri: &Uri) -> serde_json::Map<String, Value> {
    fn opt(value: Option<&str>) -> Value {
        value
            .map(|s| Value::String(s.to_string()))
            .unwrap_or(Value::Null)
    }

    let mut object = serde_json::Map::new();
    object.insert("Scheme".into(), opt(uri.scheme.as_deref()));
    object.insert("Host".into(), opt(uri.host.as_deref()));
    object.insert(
        "Port".into(),
        uri.port.map(|p| Value::from(p)).unwrap_or(Value::Null),
    );
    object.insert("Path".into(), Value::String(uri.path.clone()));
    object.insert("Query".into(), opt(uri.query.as_deref()));
    object.insert("Fragment".into(), opt(uri.fragment.as_deref()));
    object
}
