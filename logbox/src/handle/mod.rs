//!
//! The content handler chain: an ordered set of matcher/renderer pairs.
//! The dispatcher walks the chain and hands the request to the first
//! handler whose [`matches`](ContentHandler::matches) returns true;
//! the final catch-all handler matches everything, so classification is
//! total and exclusive by priority. User handlers registered through
//! [`LoggerConfig::handlers`](crate::config::LoggerConfig) run before
//! the built-ins.
//!

use std::sync::Mutex;

use serde_json::Value;

use crate::config::PrintConfig;
use crate::content::Content;
use crate::convert::JsonConverter;
use crate::format::Frame;
use crate::result::Result;

mod bundle;
mod fault;
mod intent;
mod list;
mod map;
mod object;
mod text;
mod uri;

pub use bundle::BundleHandler;
pub use fault::FaultHandler;
pub use intent::IntentHandler;
pub use list::ListHandler;
pub use map::MapHandler;
pub use object::ObjectHandler;
pub use text::TextHandler;
pub use uri::UriHandler;

/// One node of the classifier chain.
///
/// Renderers must not fail: any conversion problem degrades to a plain
/// text representation of the value inside the handler, so a single bad
/// payload can never abort the log call.
pub trait ContentHandler: Send + Sync {
    /// Whether this handler owns the payload's shape. Exactly one handler
    /// in the chain answers true for any accepted payload.
    fn matches(&self, content: &Content) -> bool;

    /// Renders the payload in JSON-format mode.
    fn render(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String;

    /// Renders the payload when JSON formatting is off. The default wraps
    /// the payload's display text; handlers whose output does not depend
    /// on the mode redirect this to [`render`](Self::render).
    fn render_plain(&self, content: &Content, frame: &Frame, config: &PrintConfig) -> String {
        let _ = config;
        frame.wrap(&frame.indent(&content.to_string()))
    }
}

/// Chain entry: the handler plus the gate serializing its render and
/// fan-out, so the per-formatter cache of one call can never observe
/// another call's text.
pub(crate) struct HandlerNode {
    pub(crate) handler: Box<dyn ContentHandler>,
    pub(crate) gate: Mutex<()>,
}

/// Builds the chain: custom handlers first (highest priority), then the
/// built-ins in fixed order, ending with the catch-all object handler.
pub(crate) fn build_chain(custom: Vec<Box<dyn ContentHandler>>) -> Vec<HandlerNode> {
    let mut handlers = custom;
    handlers.push(Box::new(TextHandler));
    handlers.push(Box::new(FaultHandler));
    handlers.push(Box::new(BundleHandler));
    handlers.push(Box::new(IntentHandler));
    handlers.push(Box::new(UriHandler));
    handlers.push(Box::new(MapHandler));
    handlers.push(Box::new(ListHandler));
    handlers.push(Box::new(ObjectHandler));
    handlers
        .into_iter()
        .map(|handler| HandlerNode {
            handler,
            gate: Mutex::new(()),
        })
        .collect()
}

/// Serializes a value through the converter and parses the text back,
/// so non-primitive map/collection values render exactly as the
/// converter emits them.
pub(crate) fn reserialize(converter: &dyn JsonConverter, value: &Value) -> Result<Value> {
    let json = converter.to_json(value)?;
    converter.from_json(&json)
}
