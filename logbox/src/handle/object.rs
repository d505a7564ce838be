use crate::config::PrintConfig;
use crate::content::Content;
use crate::format::{Frame, BR};

use super::ContentHandler;

/// Terminal catch-all: matches everything, so classification always
/// terminates. Serializes the payload through the converter and falls
/// back to the captured debug text when serialization failed.
pub struct ObjectHandler;

impl ContentHandler for ObjectHandler {
    fn matches(&self, _content: &Content) -> bool {
        true
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let object = match content {
            Content::Object(o) => o,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let json = object
            .value
            .as_ref()
            .and_then(|value| config.converter().to_json(value).ok());
        let body = match json {
            Some(json) => format!(
                "{}{BR}{} {}",
                object.type_name,
                frame.left(),
                frame.indent(&json)
            ),
            None => format!(
                "{}{BR}{} {}",
                object.type_name,
                frame.left(),
                frame.indent(&object.fallback)
            ),
        };
        frame.wrap(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;

    #[derive(serde::Serialize, Debug)]
    struct Session {
        user: String,
        visits: u32,
    }

    #[test]
    fn serializes_structured_values() {
        let content = Content::object(&Session {
            user: "ada".into(),
            visits: 3,
        });
        let config = testing::config(true);
        let frame = testing::frame();
        let out = ObjectHandler.render(&content, &frame, &config);
        assert!(out.contains("Session"));
        assert!(out.contains("\"user\": \"ada\""));
        assert!(out.contains("\"visits\": 3"));
    }

    #[test]
    fn falls_back_to_debug_text_when_unserializable() {
        struct Opaque;
        impl std::fmt::Debug for Opaque {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("Opaque(..)")
            }
        }
        impl serde::Serialize for Opaque {
            fn serialize<S: serde::Serializer>(
                &self,
                _serializer: S,
            ) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not serializable"))
            }
        }
        let content = Content::object(&Opaque);
        let config = testing::config(true);
        let frame = testing::frame();
        let out = ObjectHandler.render(&content, &frame, &config);
        assert!(out.contains("Opaque(..)"));
    }

    #[test]
    fn matches_everything() {
        assert!(ObjectHandler.matches(&Content::from("anything")));
        assert!(ObjectHandler.matches(&Content::list(vec![1])));
    }

    #[test]
    fn plain_mode_wraps_the_display_text() {
        let content = Content::object(&Session {
            user: "ada".into(),
            visits: 3,
        });
        let config = testing::config(false);
        let frame = testing::frame();
        let out = ObjectHandler.render_plain(&content, &frame, &config);
        assert!(out.contains("Session"));
        assert!(out.contains("ada"));
    }
}
