//!
//! Output sinks. A [`Sink`] receives the fully rendered text for one log
//! call; its transport (console, file, telemetry) is its own concern and
//! write failures are never retried by the pipeline.
//!

use std::io::Write;
use std::sync::{Arc, Mutex};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::format::{Formatter, SimpleFormatter};
use crate::levels::Level;

/// An output destination for rendered log text. Multiple sinks may share
/// one formatter instance; the fan-out then renders once per distinct
/// formatter and reuses the text.
pub trait Sink: Send + Sync {
    /// Formatter used to frame content for this sink.
    fn formatter(&self) -> Arc<dyn Formatter>;

    /// Disabled sinks are skipped during fan-out.
    fn enabled(&self) -> bool {
        true
    }

    /// Delivers one rendered block.
    fn write(&self, level: Level, tag: &str, text: &str);
}

/// Writes to stdout with a level-colored `L/tag` prefix.
pub struct ConsoleSink {
    formatter: Arc<dyn Formatter>,
    color: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_formatter(Arc::new(SimpleFormatter))
    }

    pub fn with_formatter(formatter: Arc<dyn Formatter>) -> Self {
        Self {
            formatter,
            color: true,
        }
    }

    /// Disables ANSI colors regardless of terminal detection.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Verbose => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

impl Sink for ConsoleSink {
    fn formatter(&self) -> Arc<dyn Formatter> {
        self.formatter.clone()
    }

    fn write(&self, level: Level, tag: &str, text: &str) {
        let choice = if self.color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut out = StandardStream::stdout(choice);
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(level_color(level))).set_bold(true);
        let _ = out.set_color(&spec);
        let _ = write!(out, "{}/{}", level.short(), tag);
        let _ = out.reset();
        let _ = writeln!(out, "{text}");
    }
}

/// Captures rendered output in memory; the assertion surface used by the
/// crate's own tests, also handy for applications that need to inspect
/// log output.
pub struct MemorySink {
    formatter: Arc<dyn Formatter>,
    records: Mutex<Vec<(Level, String, String)>>,
    enabled: bool,
}

impl MemorySink {
    pub fn new(formatter: Arc<dyn Formatter>) -> Self {
        Self {
            formatter,
            records: Mutex::new(Vec::new()),
            enabled: true,
        }
    }

    pub fn disabled(formatter: Arc<dyn Formatter>) -> Self {
        Self {
            enabled: false,
            ..Self::new(formatter)
        }
    }

    /// Snapshot of everything written so far.
    pub fn records(&self) -> Vec<(Level, String, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Sink for MemorySink {
    fn formatter(&self) -> Arc<dyn Formatter> {
        self.formatter.clone()
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn write(&self, level: Level, tag: &str, text: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, tag.to_string(), text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_writes() {
        let sink = MemorySink::new(Arc::new(SimpleFormatter));
        sink.write(Level::Info, "t", "hello");
        sink.write(Level::Error, "t", "boom");
        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (Level::Info, "t".into(), "hello".into()));
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn disabled_sink_reports_disabled() {
        let sink = MemorySink::disabled(Arc::new(SimpleFormatter));
        assert!(!sink.enabled());
    }
}
