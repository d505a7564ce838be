//!
//! Adapter routing records from the `log` facade into the global logger.
//! Enabled with the `external-logger` feature so dependencies that log
//! through `log::info!` and friends land in the same sinks.
//!

use crate::callsite::CallSite;
use crate::content::Content;
use crate::levels::Level;
use crate::logger;

struct FacadeBridge;

static BRIDGE: FacadeBridge = FacadeBridge;

fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Verbose,
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warn,
        log::Level::Error => Level::Error,
    }
}

impl log::Log for FacadeBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        logger::global()
            .map(|logger| logger.level_enabled(map_level(metadata.level())))
            .unwrap_or(false)
    }

    fn log(&self, record: &log::Record) {
        let Some(logger) = logger::global() else {
            return;
        };
        let site = CallSite::new(
            record.file().unwrap_or(""),
            record.line().unwrap_or(0),
            record.module_path().unwrap_or(""),
        );
        logger.dispatch(
            map_level(record.level()),
            Some(record.target()),
            Content::Text(record.args().to_string()),
            Some(site),
        );
    }

    fn flush(&self) {}
}

/// Installs the bridge as the `log` facade backend. Call once, after
/// [`init`](crate::init). Level filtering is left to the logger, so the
/// facade maximum is opened all the way.
pub fn init_log_bridge() -> std::result::Result<(), log::SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_levels_map_onto_local_levels() {
        assert_eq!(map_level(log::Level::Trace), Level::Verbose);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Warn), Level::Warn);
        assert_eq!(map_level(log::Level::Error), Level::Error);
    }
}
