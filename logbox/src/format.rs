//!
//! Decorative framing. A [`Formatter`] supplies the border pieces; a
//! [`Frame`] is the per-call template built from those pieces plus the
//! configured header lines, thread info and call site, with a single
//! body slot between the left margin and the bottom border.
//!

use crate::callsite::CallSite;
use crate::config::PrintConfig;

/// Line separator used throughout the rendered output.
pub const BR: char = '\n';

/// Border pieces of a log frame. Each sink carries a formatter; sinks may
/// share one instance, in which case the fan-out renders once per
/// distinct formatter rather than once per sink.
pub trait Formatter: Send + Sync {
    /// Top border, surrounded by line breaks.
    fn top(&self) -> &str;
    /// Divider between header lines and the body, surrounded by line breaks.
    fn middle(&self) -> &str;
    /// Bottom border, surrounded by line breaks.
    fn bottom(&self) -> &str;
    /// Left margin prefixed to every line inside the frame.
    fn left(&self) -> &str;
}

/// Full double-line box frame.
pub struct BorderFormatter;

impl Formatter for BorderFormatter {
    fn top(&self) -> &str {
        "\n╔══════════════════════════════════════════════════════════════════════════════════════════════════\n"
    }

    fn middle(&self) -> &str {
        "\n╟──────────────────────────────────────────────────────────────────────────────────────────────────\n"
    }

    fn bottom(&self) -> &str {
        "\n╚══════════════════════════════════════════════════════════════════════════════════════════════════\n"
    }

    fn left(&self) -> &str {
        "║ "
    }
}

/// Minimal top/bottom-rule style with a plain blank margin.
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn top(&self) -> &str {
        "\n╔══════════════════════════════════════════════════════════════════════════════════════════════════\n"
    }

    fn middle(&self) -> &str {
        "\n╟\n"
    }

    fn bottom(&self) -> &str {
        "\n╚\n"
    }

    fn left(&self) -> &str {
        "  "
    }
}

/// Immutable per-call template: everything around the body, split at the
/// body slot.
pub struct Frame {
    prefix: String,
    suffix: String,
    left: String,
}

impl Frame {
    /// Builds the template for one log call: top border, header lines,
    /// optional thread info, optional call site, then the left margin
    /// that the body follows.
    pub fn build(
        formatter: &dyn Formatter,
        config: &PrintConfig,
        site: Option<&CallSite>,
    ) -> Frame {
        let mut prefix = String::with_capacity(256);
        prefix.push_str(formatter.top());
        if !config.headers.is_empty() {
            for (i, header) in config.headers.iter().enumerate() {
                if i > 0 {
                    prefix.push(BR);
                }
                prefix.push_str(formatter.left());
                prefix.push_str(header);
            }
            prefix.push_str(formatter.middle());
        }
        if config.show_thread_info {
            prefix.push_str(formatter.left());
            prefix.push_str("Thread : ");
            let thread = std::thread::current();
            prefix.push_str(thread.name().unwrap_or("<unnamed>"));
            prefix.push_str(formatter.middle());
        }
        if config.show_call_site {
            if let Some(site) = site {
                prefix.push_str(formatter.left());
                prefix.push_str(&site.to_string());
                prefix.push_str(formatter.middle());
            }
        }
        prefix.push_str(formatter.left());
        Frame {
            prefix,
            suffix: formatter.bottom().to_string(),
            left: formatter.left().to_string(),
        }
    }

    /// Fills the body slot.
    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(body);
        out.push_str(&self.suffix);
        out
    }

    /// Re-prefixes every line break with the left margin so multi-line
    /// bodies stay inside the frame.
    pub fn indent(&self, text: &str) -> String {
        if !text.contains(BR) {
            return text.to_string();
        }
        let mut margin = String::with_capacity(1 + self.left.len());
        margin.push(BR);
        margin.push_str(&self.left);
        text.replace(BR, &margin)
    }

    pub fn left(&self) -> &str {
        &self.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrintConfig;

    fn config(headers: Vec<String>, thread: bool, call_site: bool) -> PrintConfig {
        PrintConfig {
            sinks: Vec::new(),
            headers,
            show_thread_info: thread,
            show_call_site: call_site,
            json_format: false,
            converter: std::sync::Arc::new(crate::convert::SerdeConverter),
            multi_sink: false,
            stack_filters: Vec::new(),
            provider: None,
        }
    }

    #[test]
    fn frame_has_borders_and_margin() {
        let cfg = config(Vec::new(), false, false);
        let frame = Frame::build(&BorderFormatter, &cfg, None);
        let text = frame.wrap("body");
        assert!(text.contains('╔'));
        assert!(text.contains('╚'));
        assert!(text.contains("║ body"));
        assert!(!text.contains('╟'));
    }

    #[test]
    fn headers_render_one_line_each_before_divider() {
        let cfg = config(vec!["first".into(), "second".into()], false, false);
        let frame = Frame::build(&BorderFormatter, &cfg, None);
        let text = frame.wrap("x");
        assert!(text.contains("║ first\n║ second"));
        assert!(text.contains('╟'));
    }

    #[test]
    fn thread_and_call_site_lines_toggle() {
        let site = CallSite::new("main.rs", 42, "app::run");
        let cfg = config(Vec::new(), true, true);
        let frame = Frame::build(&BorderFormatter, &cfg, Some(&site));
        let text = frame.wrap("x");
        assert!(text.contains("Thread : "));
        assert!(text.contains("app::run (main.rs:42)"));

        let cfg = config(Vec::new(), false, false);
        let frame = Frame::build(&BorderFormatter, &cfg, Some(&site));
        let text = frame.wrap("x");
        assert!(!text.contains("Thread : "));
        assert!(!text.contains("app::run"));
    }

    #[test]
    fn indent_keeps_multi_line_bodies_inside_the_frame() {
        let cfg = config(Vec::new(), false, false);
        let frame = Frame::build(&BorderFormatter, &cfg, None);
        assert_eq!(frame.indent("a\nb"), "a\n║ b");
        assert_eq!(frame.indent("plain"), "plain");
    }
}
