use crate::config::PrintConfig;
use crate::content::Content;
use crate::format::Frame;

use super::ContentHandler;

/// Error payloads: renders the error type, message, the full `Caused by:`
/// chain and the backtrace when one was captured.
pub struct FaultHandler;

impl ContentHandler for FaultHandler {
    fn matches(&self, content: &Content) -> bool {
        matches!(content, Content::Fault(_))
    }

    fn render(&self, content: &Content, frame: &Frame, _config: &PrintConfig) -> String {
        let trace = match content {
            Content::Fault(t) => t,
            other => return frame.wrap(&frame.indent(&other.to_string())),
        };
        let mut body = format!("{}: {}", trace.type_name, trace.message);
        for cause in &trace.causes {
            body.push('\n');
            body.push_str("Caused by: ");
            body.push_str(cause);
        }
        if let Some(backtrace) = &trace.backtrace {
            body.push('\n');
            body.push_str(backtrace.trim_end());
        }
        frame.wrap(&frame.indent(&body))
    }

    fn render_plain(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        self.render(content, frame, config)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing;
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("outer failed")]
    struct OuterError {
        #[source]
        inner: std::io::Error,
    }

    #[test]
    fn renders_type_message_and_cause_chain() {
        let err = OuterError {
            inner: std::io::Error::new(std::io::ErrorKind::Other, "inner broke"),
        };
        let config = testing::config(false);
        let frame = testing::frame();
        let out = FaultHandler.render_plain(&Content::fault(err), &frame, &config);
        assert!(out.contains("OuterError"));
        assert!(out.contains("outer failed"));
        assert!(out.contains("Caused by: inner broke"));
        // every body line carries the frame margin
        assert!(out.contains("║ Caused by"));
    }

    #[test]
    fn matches_only_faults() {
        assert!(FaultHandler.matches(&Content::fault(crate::error::Error::Custom("x".into()))));
        assert!(!FaultHandler.matches(&Content::from("text")));
    }
}
