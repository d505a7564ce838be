//!
//! User-facing configuration ([`LoggerConfig`]) and the immutable
//! snapshot the render pipeline reads ([`PrintConfig`]). The snapshot is
//! built once per [`Logger`](crate::logger::Logger) and never mutated,
//! so no locking is needed on the read side.
//!

use std::sync::Arc;

use crate::callsite::{CallSiteProvider, StackFilter};
use crate::convert::JsonConverter;
use crate::handle::ContentHandler;
use crate::levels::Level;
use crate::sink::Sink;

/// Default pool capacity; raise it for high log rates, lower it to trim
/// idle memory.
pub const DEFAULT_POOL_SIZE: usize = 30;

/// Everything an application can configure before installing a logger.
/// All fields have working defaults; a config with no sinks produces no
/// output.
pub struct LoggerConfig {
    /// Global default tag; `None` means `"logger"`.
    pub tag: Option<String>,
    /// Extra header lines rendered at the top of every frame.
    pub headers: Vec<String>,
    /// Render a `Thread : <name>` line. Defaults to true.
    pub show_thread_info: bool,
    /// Render the resolved call-site line. Defaults to true.
    pub show_call_site: bool,
    /// Pretty-print content as JSON where the handler supports it.
    /// Defaults to false.
    pub json_format: bool,
    /// Severity floor; messages below it are dropped before
    /// classification. Defaults to [`Level::Verbose`] (no filtering).
    pub min_level: Level,
    /// Request pool capacity.
    pub pool_size: usize,
    /// Custom handlers, tried in order before the built-in chain.
    pub handlers: Vec<Box<dyn ContentHandler>>,
    /// Output sinks, fanned out in order.
    pub sinks: Vec<Arc<dyn Sink>>,
    /// Additional call-stack filters, AND-composed with the built-in one.
    pub stack_filters: Vec<Box<dyn StackFilter>>,
    /// Custom frame-list source for call-site resolution.
    pub call_site_provider: Option<Box<dyn CallSiteProvider>>,
    /// JSON converter override; `None` uses
    /// [`SerdeConverter`](crate::convert::SerdeConverter).
    pub json_converter: Option<Arc<dyn JsonConverter>>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: None,
            headers: Vec::new(),
            show_thread_info: true,
            show_call_site: true,
            json_format: false,
            min_level: Level::Verbose,
            pool_size: DEFAULT_POOL_SIZE,
            handlers: Vec::new(),
            sinks: Vec::new(),
            stack_filters: Vec::new(),
            call_site_provider: None,
            json_converter: None,
        }
    }
}

/// Immutable render configuration shared by the whole handler chain.
pub struct PrintConfig {
    pub(crate) sinks: Vec<Arc<dyn Sink>>,
    pub(crate) headers: Vec<String>,
    pub(crate) show_thread_info: bool,
    pub(crate) show_call_site: bool,
    pub(crate) json_format: bool,
    pub(crate) converter: Arc<dyn JsonConverter>,
    pub(crate) multi_sink: bool,
    pub(crate) stack_filters: Vec<Box<dyn StackFilter>>,
    pub(crate) provider: Option<Box<dyn CallSiteProvider>>,
}

impl PrintConfig {
    /// The installed JSON converter.
    pub fn converter(&self) -> &dyn JsonConverter {
        self.converter.as_ref()
    }

    /// Whether JSON pretty-printing is enabled.
    pub fn json_format(&self) -> bool {
        self.json_format
    }
}
