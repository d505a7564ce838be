//!
//! The dispatcher: obtains a pooled request, resolves the tag and call
//! site, walks the handler chain, and fans the rendered text out to the
//! configured sinks. [`Logger`] is an explicit context object; [`init`]
//! installs one instance as the process-wide facade used by the logging
//! macros.
//!

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

use crate::callsite::{self, CallSite};
use crate::config::{LoggerConfig, PrintConfig};
use crate::content::Content;
use crate::convert::SerdeConverter;
use crate::error::Error;
use crate::format::Frame;
use crate::handle::{build_chain, HandlerNode};
use crate::levels::Level;
use crate::request::{LogRequest, RequestPool};
use crate::result::Result;

const DEFAULT_TAG: &str = "logger";

/// One configured logging pipeline. Construction snapshots the
/// configuration; everything read during dispatch is immutable from then
/// on, so `log` can be called freely from any number of threads.
pub struct Logger {
    default_tag: String,
    min_level: Level,
    config: PrintConfig,
    chain: Vec<HandlerNode>,
    pool: RequestPool,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Logger {
        let LoggerConfig {
            tag,
            headers,
            show_thread_info,
            show_call_site,
            json_format,
            min_level,
            pool_size,
            handlers,
            sinks,
            stack_filters,
            call_site_provider,
            json_converter,
        } = config;
        let multi_sink = sinks.len() > 1;
        Logger {
            default_tag: tag.unwrap_or_else(|| DEFAULT_TAG.to_string()),
            min_level,
            config: PrintConfig {
                sinks,
                headers,
                show_thread_info,
                show_call_site,
                json_format,
                converter: json_converter.unwrap_or_else(|| Arc::new(SerdeConverter)),
                multi_sink,
                stack_filters,
                provider: call_site_provider,
            },
            chain: build_chain(handlers),
            pool: RequestPool::new(pool_size),
        }
    }

    /// Whether a message at `level` would pass the severity floor.
    pub fn level_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Classifies, renders and delivers one value. Empty content and
    /// content below the severity floor are dropped silently. Blocks the
    /// calling thread through rendering and every sink write.
    #[track_caller]
    pub fn log(&self, level: Level, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(level, tag, content.into(), Some(site));
    }

    #[track_caller]
    pub fn v(&self, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(Level::Verbose, tag, content.into(), Some(site));
    }

    #[track_caller]
    pub fn d(&self, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(Level::Debug, tag, content.into(), Some(site));
    }

    #[track_caller]
    pub fn i(&self, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(Level::Info, tag, content.into(), Some(site));
    }

    #[track_caller]
    pub fn w(&self, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(Level::Warn, tag, content.into(), Some(site));
    }

    #[track_caller]
    pub fn e(&self, tag: Option<&str>, content: impl Into<Content>) {
        let site = CallSite::from_location(Location::caller());
        self.dispatch(Level::Error, tag, content.into(), Some(site));
    }

    pub(crate) fn dispatch(
        &self,
        level: Level,
        tag: Option<&str>,
        content: Content,
        site: Option<CallSite>,
    ) {
        if content.is_empty() {
            return;
        }
        if !self.level_enabled(level) {
            return;
        }
        if self.config.sinks.is_empty() {
            return;
        }
        let tag = match tag {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => self.default_tag.clone(),
        };
        let mut request = self.pool.acquire();
        request.assign(level, tag, content, site);
        // the guard returns the request to the pool on both the normal
        // path and an unwinding renderer
        let guard = PoolGuard {
            pool: &self.pool,
            request: Some(request),
        };
        if let Some(request) = guard.request.as_deref() {
            for node in &self.chain {
                if node.handler.matches(request.content()) {
                    self.emit(node, request);
                    break;
                }
            }
        }
    }

    /// Renders the matched content once per distinct formatter and
    /// writes it to every enabled sink. The node gate serializes this
    /// step so the render cache of one call can never leak into another.
    fn emit(&self, node: &HandlerNode, request: &LogRequest) {
        let config = &self.config;
        let _gate = node.gate.lock().unwrap();
        let site = self.resolve_site(request);
        let mut cache: HashMap<usize, String> = HashMap::new();
        for sink in &config.sinks {
            if !sink.enabled() {
                continue;
            }
            let formatter = sink.formatter();
            let key = Arc::as_ptr(&formatter) as *const () as usize;
            let text = match cache.get(&key) {
                Some(cached) => cached.clone(),
                None => {
                    let frame = Frame::build(formatter.as_ref(), config, site.as_ref());
                    let rendered = if config.json_format {
                        node.handler.render(request.content(), &frame, config)
                    } else {
                        node.handler.render_plain(request.content(), &frame, config)
                    };
                    if config.multi_sink {
                        cache.insert(key, rendered.clone());
                    }
                    rendered
                }
            };
            sink.write(request.level(), request.tag(), &text);
        }
        // the cache is call-local and dropped before the gate releases
    }

    fn resolve_site(&self, request: &LogRequest) -> Option<CallSite> {
        if !self.config.show_call_site {
            return None;
        }
        let frames = match &self.config.provider {
            Some(provider) => provider.frames(),
            None => request.call_site().cloned().into_iter().collect(),
        };
        callsite::resolve(&frames, &self.config.stack_filters).cloned()
    }
}

struct PoolGuard<'a> {
    pool: &'a RequestPool,
    request: Option<Box<LogRequest>>,
}

impl Drop for PoolGuard<'_> {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            self.pool.release(request);
        }
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger. Must be called before any macro
/// logging; calling it a second time is a configuration error.
pub fn init(config: LoggerConfig) -> Result<()> {
    GLOBAL
        .set(Logger::new(config))
        .map_err(|_| Error::AlreadyInitialized)
}

/// The installed process-wide logger, if any.
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

#[doc(hidden)]
pub mod impls {
    use super::*;

    /// Macro entry point. Before [`init`](super::init) has run, messages
    /// degrade to a local stderr diagnostic instead of crashing or
    /// disappearing without a trace.
    #[inline]
    pub fn log_impl(level: Level, tag: Option<&str>, content: Content, site: CallSite) {
        match global() {
            Some(logger) => logger.dispatch(level, tag, content, Some(site)),
            None => {
                if !content.is_empty() {
                    eprintln!("[logbox] {level} message dropped (logger not initialized): {content}");
                }
            }
        }
    }
}
