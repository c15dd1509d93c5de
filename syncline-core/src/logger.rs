use std::fmt::Display;

use crate::{
    config::LogConfig,
    format::{Location, format_line},
    level::Severity,
    sink::Sink,
};

/// A configuration and the sink it writes to.
///
/// Usually shared as `Arc<Logger>` or through the process-wide instance of the
/// `syncline` crate. All methods take `&self` and may be called from any thread.
#[derive(Debug, Default)]
pub struct Logger {
    config: LogConfig,
    sink: Sink,
}

impl Logger {
    pub fn new(config: LogConfig, sink: Sink) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.config.is_enabled(severity)
    }

    /// Formats and writes one record if `severity` passes the minimum level.
    ///
    /// The level is checked again against the snapshot, since callers that
    /// skipped [`Logger::is_enabled`] still have to be filtered.
    pub fn log(&self, severity: Severity, location: Option<Location>, parts: &[&dyn Display]) {
        let config = self.config.snapshot();
        if severity < config.minimum_level {
            return;
        }
        let line = format_line(severity, location, parts, &config);
        self.sink.write_line(&line);
    }
}
