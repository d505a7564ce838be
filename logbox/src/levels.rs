//!
//! Severity levels used for sink decoration and the global floor filter.
//!

use std::fmt;

/// Log severity, totally ordered from [`Level::Verbose`] (lowest) to
/// [`Level::Error`] (highest). A [`Logger`](crate::logger::Logger)
/// configured with a minimum level drops every message below it before
/// the message enters the handler chain.
#[repr(usize)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Level {
    Verbose = 0,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Full uppercase label, e.g. `"VERBOSE"`.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// One-letter label used by the console sink prefix.
    pub fn short(&self) -> char {
        match self {
            Level::Verbose => 'V',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn levels_are_totally_ordered() {
        assert!(Level::Verbose < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn labels() {
        assert_eq!(Level::Warn.label(), "WARN");
        assert_eq!(Level::Error.short(), 'E');
        assert_eq!(Level::Info.to_string(), "INFO");
    }
}
