//!
//! Call-site records and the stack filtering contract. The default
//! dispatcher captures a single frame through `#[track_caller]` (the
//! macros substitute `file!()`/`line!()`/`module_path!()`); a custom
//! [`CallSiteProvider`] may supply a full frame list, which is then
//! narrowed by the configured [`StackFilter`]s.
//!

use std::fmt;
use std::panic::Location;

/// One resolved frame of the calling code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    pub(crate) fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            function: String::new(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function.is_empty() {
            write!(f, "({}:{})", self.file, self.line)
        } else {
            write!(f, "{} ({}:{})", self.function, self.file, self.line)
        }
    }
}

/// Accepts or rejects a frame during call-site resolution. All configured
/// filters must accept a frame for it to be used; the first accepted
/// frame wins.
pub trait StackFilter: Send + Sync {
    fn accept(&self, frame: &CallSite) -> bool;
}

impl<F> StackFilter for F
where
    F: Fn(&CallSite) -> bool + Send + Sync,
{
    fn accept(&self, frame: &CallSite) -> bool {
        self(frame)
    }
}

/// Supplies the frame list to resolve a call site from, outermost
/// library-facing frame first. Installed through
/// [`LoggerConfig::call_site_provider`](crate::config::LoggerConfig).
pub trait CallSiteProvider: Send + Sync {
    fn frames(&self) -> Vec<CallSite>;
}

/// Built-in filter excluding this crate's own frames.
struct OwnFrameFilter;

impl StackFilter for OwnFrameFilter {
    fn accept(&self, frame: &CallSite) -> bool {
        !frame.function.starts_with("logbox::") && !frame.file.contains("logbox/src/")
    }
}

/// Walks `frames` until one passes the built-in filter and every
/// configured filter; falls back to the first frame when none passes.
/// Never fails.
pub(crate) fn resolve<'a>(
    frames: &'a [CallSite],
    filters: &[Box<dyn StackFilter>],
) -> Option<&'a CallSite> {
    let own = OwnFrameFilter;
    'frames: for frame in frames {
        if !own.accept(frame) {
            continue;
        }
        for filter in filters {
            if !filter.accept(frame) {
                continue 'frames;
            }
        }
        return Some(frame);
    }
    frames.first()
}
