use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::Content;
use crate::convert::is_primitive;
use crate::format::{Frame, BR};

use super::{reserialize, ContentHandler};

/// Map payloads. The header line carries the concrete source type and
/// entry count; the body is a JSON object.
///
/// The first value decides the strategy for every entry: a scalar first
/// value embeds all values verbatim, anything else routes each value
/// through the converter. Mixed-type maps therefore render later scalar
/// values as raw converter output; that heuristic is long-standing
/// observable behavior and is kept as-is.
pub struct MapHandler;

impl ContentHandler for MapHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Map(_))
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let map = match content {
            Content::Map(m) => m,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{} size = {}{BR}{}", map.type_name, map.entries.len(), frame.left());
        let body = match build_object(map.entries(), config) {
            Ok(object) => {
                let json = config
                    .converter()
                    .to_json(&Value::Object(object))
                    .unwrap_or_else(|_| map.to_string());
                frame.indent(&json)
            }
            Err(_) => frame.indent(&map.to_string()),
        };
        frame.wrap(&format!("{header}{body}"))
    }

    fn render_plain(&self, content: &Content, frame: &Frame, _config: &PrintConfig) -> String {
        let map = match content {
            Content::Map(m) => m,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{} size = {}{BR}{}", map.type_name, map.entries.len(), frame.left());
        let body = frame.indent(&map.to_string());
        frame.wrap(&format!("{header}{body}"))
    }
}

fn build_object(
    entries: &[(String, Value)],
    config: &PrintConfig,
) -> crate::result::Result<serde_json::Map<String, Value>> {
    let primitive = entries
        .first()
        .map(|(_, v)| is_primitive(v))
        .unwrap_or(false);
    let mut object = serde_json::Map::new();
    for (key, value) in entries {
        let rendered = if primitive {
            value.clone()
        } else {
            reserialize(config.converter(), value)?
        };
        object.insert(key.clone(), rendered);
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn header_carries_type_and_size() {
        let mut source = BTreeMap::new();
        source.insert("a", 1);
        source.insert("b", 2);
        let content = Content::map(source);
        let config = testing::config(true);
        let frame = testing::frame();
        let out = MapHandler.render(&content, &frame, &config);
        assert!(out.contains("BTreeMap"));
        assert!(out.contains("size = 2"));
        assert!(out.contains("\"a\": 1"));
        assert!(out.contains("\"b\": 2"));
    }

    #[test]
    fn plain_mode_keeps_the_size_header() {
        let mut source = BTreeMap::new();
        source.insert("k", "v");
        let content = Content::map(source);
        let config = testing::config(false);
        let frame = testing::frame();
        let out = MapHandler.render_plain(&content, &frame, &config);
        assert!(out.contains("size = 1"));
        assert!(out.contains("k=\"v\""));
    }

    #[test]
    fn non_primitive_first_value_routes_through_converter() {
        #[derive(serde::Serialize)]
        struct Nested {
            n: u32,
        }
        let content = Content::map(vec![("obj", Nested { n: 5 })]);
        let config = testing::config(true);
        let frame = testing::frame();
        let out = MapHandler.render(&content, &frame, &config);
        assert!(out.contains("\"n\": 5"));
    }
}
