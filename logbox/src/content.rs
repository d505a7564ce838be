//!
//! [`Content`] is the classified unit of log payload. Callers hand the
//! logger an arbitrary value; construction lowers it into one of the
//! content shapes the handler chain knows how to render.
//!
//! Structured payloads (maps, collections, objects) are lowered to
//! [`serde_json::Value`] eagerly since Rust has no runtime reflection;
//! the installed [`JsonConverter`](crate::convert::JsonConverter) still
//! owns all string-level serialization during rendering.
//!

use serde::Serialize;
use serde_json::Value;
use std::any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A log payload, classified by shape.
pub enum Content {
    /// Plain text. Whitespace-only text is suppressed before it reaches
    /// the handler chain.
    Text(String),
    /// A captured error with its source chain.
    Fault(ErrorTrace),
    /// A string-keyed extras container.
    Bundle(Bundle),
    /// A navigation-intent record.
    Intent(Intent),
    /// A parsed URI.
    Uri(Uri),
    /// A key/value mapping with the concrete source type captured.
    Map(TypedMap),
    /// An ordered sequence with the concrete source type captured.
    List(TypedList),
    /// Any other structured value, serialized through `serde`.
    Object(TypedObject),
}

impl Content {
    /// Captures an error together with its `source()` chain and a
    /// best-effort backtrace.
    pub fn fault<E>(err: E) -> Content
    where
        E: std::error::Error,
    {
        let mut causes = Vec::new();
        let mut cursor = err.source();
        while let Some(cause) = cursor {
            causes.push(cause.to_string());
            cursor = cause.source();
        }
        let bt = Backtrace::capture();
        let backtrace =
            matches!(bt.status(), BacktraceStatus::Captured).then(|| bt.to_string());
        Content::Fault(ErrorTrace {
            type_name: any::type_name::<E>(),
            message: err.to_string(),
            causes,
            backtrace,
        })
    }

    /// Lowers a key/value mapping, capturing the concrete map type for
    /// the rendered `size =` header.
    pub fn map<M, K, V>(map: M) -> Content
    where
        M: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: Serialize,
    {
        let type_name = any::type_name::<M>();
        let entries = map
            .into_iter()
            .map(|(k, v)| (k.to_string(), to_value_or_text(&v)))
            .collect();
        Content::Map(TypedMap { type_name, entries })
    }

    /// Lowers an ordered sequence, capturing the concrete collection type
    /// for the rendered `size =` header.
    pub fn list<C>(items: C) -> Content
    where
        C: IntoIterator,
        C::Item: Serialize,
    {
        let type_name = any::type_name::<C>();
        let items = items.into_iter().map(|v| to_value_or_text(&v)).collect();
        Content::List(TypedList { type_name, items })
    }

    /// Lowers any serializable value. Serialization failure is captured
    /// here so the catch-all handler can fall back to the debug text.
    pub fn object<T>(value: &T) -> Content
    where
        T: Serialize + fmt::Debug,
    {
        let fallback = format!("{value:?}");
        let json = serde_json::to_value(value).ok();
        Content::Object(TypedObject {
            type_name: any::type_name::<T>(),
            value: json,
            fallback,
        })
    }

    /// True when the payload carries nothing worth printing; the
    /// dispatcher drops such requests silently.
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Text(s) if s.trim().is_empty())
    }
}

fn to_value_or_text<V: Serialize>(value: &V) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(s) => f.write_str(s),
            Content::Fault(t) => write!(f, "{}: {}", t.type_name, t.message),
            Content::Bundle(b) => b.fmt(f),
            Content::Intent(i) => i.fmt(f),
            Content::Uri(u) => u.fmt(f),
            Content::Map(m) => m.fmt(f),
            Content::List(l) => l.fmt(f),
            Content::Object(o) => f.write_str(&o.fallback),
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<Cow<'_, str>> for Content {
    fn from(s: Cow<'_, str>) -> Self {
        Content::Text(s.into_owned())
    }
}

impl From<Bundle> for Content {
    fn from(b: Bundle) -> Self {
        Content::Bundle(b)
    }
}

impl From<Intent> for Content {
    fn from(i: Intent) -> Self {
        Content::Intent(i)
    }
}

impl From<Uri> for Content {
    fn from(u: Uri) -> Self {
        Content::Uri(u)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        let fallback = value.to_string();
        Content::Object(TypedObject {
            type_name: any::type_name::<Value>(),
            value: Some(value),
            fallback,
        })
    }
}

/// Absent payloads log nothing; `log(level, tag, None::<String>)` is a
/// silent no-op rather than an error.
impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Content::Text(String::new()),
        }
    }
}

/// Captured error payload: type name, display message, the source chain
/// and an optional backtrace (present only when backtrace capture is
/// enabled for the process).
pub struct ErrorTrace {
    pub(crate) type_name: &'static str,
    pub(crate) message: String,
    pub(crate) causes: Vec<String>,
    pub(crate) backtrace: Option<String>,
}

impl ErrorTrace {
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

/// String-keyed extras container, the `Bundle` of the mobile world.
/// Values are lowered to JSON eagerly; inserting an unserializable value
/// stores its error text instead of failing the log call.
#[derive(Clone, Default)]
pub struct Bundle {
    entries: Vec<(String, Value)>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn put(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) {
        let key = key.into();
        let value = to_value_or_text(&value);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bundle[{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}]")
    }
}

/// Navigation-intent record: the fixed field schema the intent handler
/// extracts into a JSON object.
#[derive(Clone, Default)]
pub struct Intent {
    pub scheme: Option<String>,
    pub action: Option<String>,
    pub data: Option<String>,
    pub mime_type: Option<String>,
    pub package: Option<String>,
    pub component: Option<String>,
    pub categories: Vec<String>,
    pub extras: Option<Bundle>,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn extras(mut self, extras: Bundle) -> Self {
        self.extras = Some(extras);
        self
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Intent {")?;
        let mut first = true;
        let mut field = |f: &mut fmt::Formatter<'_>, name: &str, value: &str| {
            let sep = if first { " " } else { ", " };
            first = false;
            write!(f, "{sep}{name}={value}")
        };
        if let Some(action) = &self.action {
            field(f, "act", action)?;
        }
        if let Some(data) = &self.data {
            field(f, "dat", data)?;
        }
        if let Some(mime) = &self.mime_type {
            field(f, "typ", mime)?;
        }
        if let Some(package) = &self.package {
            field(f, "pkg", package)?;
        }
        if let Some(component) = &self.component {
            field(f, "cmp", component)?;
        }
        if !self.categories.is_empty() {
            field(f, "cat", &self.categories.join(","))?;
        }
        if let Some(extras) = &self.extras {
            field(f, "extras", &extras.to_string())?;
        }
        f.write_str(" }")
    }
}

/// A URI decomposed into the fixed field schema the URI handler renders.
/// Parsing is intentionally shallow; the handler only needs the pieces,
/// not validation.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Uri {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::InvalidUri(s.to_string()));
        }
        let mut uri = Uri::default();
        let rest = match s.split_once('#') {
            Some((rest, fragment)) => {
                uri.fragment = Some(fragment.to_string());
                rest
            }
            None => s,
        };
        let rest = match rest.split_once('?') {
            Some((rest, query)) => {
                uri.query = Some(query.to_string());
                rest
            }
            None => rest,
        };
        match rest.split_once("://") {
            Some((scheme, remainder)) => {
                uri.scheme = Some(scheme.to_string());
                let (authority, path) = match remainder.find('/') {
                    Some(i) => (&remainder[..i], &remainder[i..]),
                    None => (remainder, ""),
                };
                match authority.rsplit_once(':') {
                    Some((host, port)) if port.parse::<u16>().is_ok() => {
                        uri.host = Some(host.to_string());
                        uri.port = port.parse().ok();
                    }
                    _ => uri.host = Some(authority.to_string()),
                }
                uri.path = path.to_string();
            }
            None => uri.path = rest.to_string(),
        }
        Ok(uri)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}://")?;
        }
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Map payload with the concrete source type captured for the header.
pub struct TypedMap {
    pub(crate) type_name: &'static str,
    pub(crate) entries: Vec<(String, Value)>,
}

impl TypedMap {
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }
}

impl fmt::Display for TypedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

/// Sequence payload with the concrete source type captured for the header.
pub struct TypedList {
    pub(crate) type_name: &'static str,
    pub(crate) items: Vec<Value>,
}

impl TypedList {
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

impl fmt::Display for TypedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Catch-all payload: the serialized value when serialization succeeded,
/// and the debug text to fall back to when it did not.
pub struct TypedObject {
    pub(crate) type_name: &'static str,
    pub(crate) value: Option<Value>,
    pub(crate) fallback: String,
}

impl TypedObject {
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn whitespace_only_text_is_empty() {
        assert!(Content::from("").is_empty());
        assert!(Content::from("   \t\n").is_empty());
        assert!(!Content::from(" x ").is_empty());
        assert!(Content::from(None::<String>).is_empty());
    }

    #[test]
    fn map_captures_type_and_size() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let Content::Map(m) = Content::map(map) else {
            panic!("expected map content");
        };
        assert!(m.type_name().contains("BTreeMap"));
        assert_eq!(m.entries().len(), 2);
    }

    #[test]
    fn list_display_embeds_primitives_verbatim() {
        let Content::List(l) = Content::list(vec![1, 2, 3]) else {
            panic!("expected list content");
        };
        assert_eq!(l.to_string(), "[1, 2, 3]");
        assert_eq!(l.items().len(), 3);
    }

    #[test]
    fn fault_captures_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = crate::error::Error::SerdeJson(serde_json::Error::io(inner));
        let Content::Fault(trace) = Content::fault(err) else {
            panic!("expected fault content");
        };
        assert!(trace.type_name().contains("Error"));
        assert!(trace.message().contains("disk gone"));
    }

    #[test]
    fn uri_parse_roundtrip() {
        let uri: Uri = "https://example.com:8443/a/b?x=1#top".parse().unwrap();
        assert_eq!(uri.scheme.as_deref(), Some("https"));
        assert_eq!(uri.host.as_deref(), Some("example.com"));
        assert_eq!(uri.port, Some(8443));
        assert_eq!(uri.path, "/a/b");
        assert_eq!(uri.query.as_deref(), Some("x=1"));
        assert_eq!(uri.fragment.as_deref(), Some("top"));
        assert_eq!(uri.to_string(), "https://example.com:8443/a/b?x=1#top");
        assert!("  ".parse::<Uri>().is_err());
    }

    #[test]
    fn bundle_insert_replaces_existing_key() {
        let bundle = Bundle::new().put("k", 1).put("k", 2).put("other", "x");
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.to_string(), "Bundle[{k=2, other=\"x\"}]");
    }

    #[test]
    fn object_keeps_fallback_text() {
        #[derive(serde::Serialize, Debug)]
        struct Payload {
            id: u32,
        }
        let Content::Object(obj) = Content::object(&Payload { id: 7 }) else {
            panic!("expected object content");
        };
        assert!(obj.type_name().contains("Payload"));
        assert!(obj.value().is_some());
    }
}
