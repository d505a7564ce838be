use crate::config::PrintConfig;
use crate::content::Content;
use crate::format::Frame;

use super::ContentHandler;

/// String-like payloads. Matches only when the trimmed content is
/// non-empty; whitespace-only text never produces output (the dispatcher
/// suppresses it before the chain, and this handler refuses it too).
pub struct TextHandler;

impl ContentHandler for TextHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Text(s) if !s.trim().is_empty())
    }

    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let text = match content {
            Content::Text(s) => s.trim(),
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let body = if config.json_format {
            pretty_or_raw(text, config)
        } else {
            text.to_string()
        };
        frame.wrap(&frame.indent(&body))
    }

    fn render_plain(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        self.render(content, frame, config)
    }
}

/// Detects an embedded JSON object or array by its leading character and
/// re-serializes it pretty-printed; any parse failure falls back to the
/// raw text.
fn pretty_or_raw(text: &str, config: &PrintConfig) -> String {
    if !text.starts_with('{') && !text.starts_with('[') {
        return text.to_string();
    }
    config
        .converter()
        .from_json(text)
        .and_then(|value| config.converter().to_json(&value))
        .unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;

    #[test]
    fn matches_only_non_blank_text() {
        assert!(TextHandler.matches(&Content::from(" x ")));
        assert!(!TextHandler.matches(&Content::from("   ")));
        assert!(!TextHandler.matches(&Content::list(vec![1])));
    }

    #[test]
    fn plain_mode_trims_and_wraps() {
        let config = testing::config(false);
        let frame = testing::frame();
        let out = TextHandler.render_plain(&Content::from("  hello  "), &frame, &config);
        assert!(out.contains("║ hello"));
        assert!(!out.contains("  hello  "));
    }

    #[test]
    fn json_mode_pretty_prints_embedded_objects() {
        let config = testing::config(true);
        let frame = testing::frame();
        let out = TextHandler.render(&Content::from(r#"{"a":1}"#), &frame, &config);
        assert!(out.contains("║ {"));
        assert!(out.contains("\"a\": 1"));
    }

    #[test]
    fn json_mode_falls_back_on_parse_failure() {
        let config = testing::config(true);
        let frame = testing::frame();
        let out = TextHandler.render(&Content::from("{not json"), &frame, &config);
        assert!(out.contains("{not json"));
    }

    #[test]
    fn multi_line_text_stays_inside_the_frame() {
        let config = testing::config(false);
        let frame = testing::frame();
        let out = TextHandler.render(&Content::from("a\nb"), &frame, &config);
        assert!(out.contains("║ a\n║ b"));
    }
}
