//!
//! [`logbox`] is an in-process logging toolkit built around three ideas:
//! content is classified by a chain of handlers, rendered once per
//! output format, and delivered to any number of sinks.
//!
//! A log call accepts more than strings: errors, key-value bundles,
//! navigation intents, URIs, maps, lists and arbitrary serializable
//! values all have dedicated renderings. Output is framed with
//! decorative borders carrying optional headers, the calling thread and
//! the resolved call site.
//!
//! The following macros log through the process-wide logger:
//! - `logv!()`
//! - `logd!()`
//! - `logi!()`
//! - `logw!()`
//! - `loge!()`
//!
//! # Example
//!
//! ```no_run
//! use logbox::prelude::*;
//! use std::sync::Arc;
//!
//! let mut config = LoggerConfig::default();
//! config.tag = Some("app".to_string());
//! config.json_format = true;
//! config.sinks = vec![Arc::new(ConsoleSink::new())];
//! logbox::init(config).unwrap();
//!
//! logi!("service started");
//! logw!(tag: "net", Content::list(vec![1, 2, 3]));
//! ```
//!
//! An explicit [`Logger`] can also be constructed and used directly when
//! a process needs more than one pipeline.
//!

pub mod callsite;
pub mod config;
pub mod content;
pub mod convert;
pub mod error;
pub mod format;
pub mod handle;
pub mod levels;
pub mod logger;
mod macros;
pub mod request;
pub mod result;
pub mod sink;

#[cfg(feature = "external-logger")]
pub mod bridge;

pub use callsite::{CallSite, CallSiteProvider, StackFilter};
pub use config::{LoggerConfig, PrintConfig};
pub use content::{Bundle, Content, ErrorTrace, Intent, TypedList, TypedMap, TypedObject, Uri};
pub use convert::{JsonConverter, SerdeConverter};
pub use error::Error;
pub use format::{BorderFormatter, Formatter, Frame, SimpleFormatter};
pub use handle::ContentHandler;
pub use levels::Level;
pub use logger::{global, init, Logger};
pub use result::Result;
pub use sink::{ConsoleSink, MemorySink, Sink};

#[cfg(feature = "external-logger")]
pub use bridge::init_log_bridge;

#[doc(hidden)]
pub use logger::impls;

pub mod prelude {
    pub use super::callsite::*;
    pub use super::config::*;
    pub use super::content::*;
    pub use super::convert::*;
    pub use super::format::*;
    pub use super::handle::ContentHandler;
    pub use super::levels::*;
    pub use super::logger::{global, init, Logger};
    pub use super::sink::*;
    pub use crate::{logd, loge, logi, logv, logw};
}
