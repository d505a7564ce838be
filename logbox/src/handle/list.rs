use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::Content;
use crate::convert::is_primitive;
use crate::format::{Frame, BR};

use super::{reserialize, ContentHandler};

/// Collection payloads. Same shape as the map handler: a `size =` header
/// followed by the body, with the first element deciding between
/// verbatim embedding and per-element converter round-trips (the same
/// deliberate heuristic as for maps).
pub struct ListHandler;

impl ContentHandler for ListHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::List(_))
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let list = match content {
            Content::List(l) => l,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{} size = {}{BR}{}", list.type_name, list.items.len(), frame.left());
        let primitive = list.items.first().map(is_primitive).unwrap_or(false);
        let body = if primitive {
            list.to_string()
        } else {
            match build_array(list.items(), config) {
                Ok(array) => {
                    let json = config
                        .converter()
                        .to_json(&Value::Array(array))
                        .unwrap_or_else(|_| list.to_string());
                    frame.indent(&json)
                }
                Err(_) => frame.indent(&list.to_string()),
            }
        };
        frame.wrap(&format!("{header}{body}"))
    }

    fn render_plain(&self, content: &Content, frame: &Frame, _config: &PrintConfig) -> String {
        let list = match content {
            Content::List(l) => l,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let header = format!("{} size = {}{BR}{}", list.type_name, list.items.len(), frame.left());
        frame.wrap(&format!("{header}{}", frame.indent(&list.to_string())))
    }
}

fn build_array(items: &[Value], config: &PrintConfig) -> crate::result::Result<Vec<Value>> {
    items
        .iter()
        .map(|item| reserialize(config.converter(), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;

    #[test]
    fn primitive_elements_embed_verbatim_with_size_header() {
        let content = Content::list(vec![1, 2, 3]);
        let config = testing::config(false);
        let frame = testing::frame();
        let out = ListHandler.render_plain(&content, &frame, &config);
        assert!(out.contains("size = 3"));
        assert!(out.contains("[1, 2, 3]"));
    }

    #[test]
    fn structured_elements_render_as_json_array() {
        #[derive(serde::Serialize)]
        struct Item {
            id: u32,
        }
        let content = Content::list(vec![Item { id: 1 }, Item { id: 2 }]);
        let config = testing::config(true);
        let frame = testing::frame();
        let out = ListHandler.render(&content, &frame, &config);
        assert!(out.contains("size = 2"));
        assert!(out.contains("\"id\": 1"));
        assert!(out.contains("\"id\": 2"));
    }

    #[test]
    fn empty_list_renders_size_zero() {
        let content = Content::list(Vec::<u32>::new());
        let config = testing::config(true);
        let frame = testing::frame();
        let out = ListHandler.render(&content, &frame, &config);
        assert!(out.contains("size = 0"));
    }
}
