//! # syncline
//! Thread-safe line logger. Every record is formatted outside any lock and
//! then written and flushed as one unit, so lines from concurrent threads never
//! interleave.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! syncline = "0.1.0"
//! ```
//!
//! ```rust
//! syncline::info!("Hello, ", "world", "!");
//! syncline::debug!("not evaluated: ", expensive());
//! # fn expensive() -> u64 { 42 }
//! ```
//!
//! Prints to stderr:
//! ```text
//! [2024-03-05 07:08:09.010] [main:1] [INFO] Hello, world!
//! ```
//!
//! ## Configuration
//! The process-wide logger starts from `SYNCLINE_LEVEL`, `SYNCLINE_THREAD_ID`,
//! `SYNCLINE_LOCATION` and `SYNCLINE_COLOURS`, and every setting can be changed
//! at runtime from any thread.
//!
//! ```rust
//! use syncline::Severity;
//!
//! syncline::set_minimum_level(Severity::Warn);
//! syncline::set_include_location(true);
//! syncline::info!("dropped");
//! syncline::warn!("kept, with its call site");
//! ```
//!
//! ## Multi-threaded logging
//! ```rust
//! let handles: Vec<_> = (0..5).map(|i| {
//!     std::thread::spawn(move || {
//!         syncline::warn!("Hello, world from thread ", i, "!");
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Owned loggers and the `log` facade
//! ```rust,standalone_crate
//! use syncline::{SharedBuffer, Severity, logger_config};
//!
//! let buffer = SharedBuffer::new();
//! let logger = logger_config()
//!     .with_colours(false)
//!     .with_thread_id(false)
//!     .with_writer(buffer.clone())
//!     .build();
//! syncline::error!(logger: logger; "code ", 7);
//! assert!(buffer.contents().ends_with("[ERROR] code 7\n"));
//!
//! // installs the process-wide logger and routes `log::*!` through it
//! let global = logger_config()
//!     .with_level(Severity::Debug)
//!     .init_global()
//!     .expect("first initialisation");
//! log::debug!("from the log crate");
//! assert_eq!(global.config().minimum_level(), Severity::Debug);
//! ```

mod macros;

use std::{
    fmt,
    io::Write,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::{LevelFilter, Log};

pub use syncline_core::{
    ConfigSnapshot, LevelStyle, Location, LogConfig, LogStderr, Logger, ParseSeverityError,
    Record, Severity, SharedBuffer, Sink,
};

/// Process-wide logger, created on first use and kept for the rest of the process.
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, writing to stderr with settings from the environment
/// unless [`ConfigBuilder::init_global`] ran first.
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(LogConfig::from_env(), Sink::stderr()))
}

/// Set once the `log` facade routes to the process-wide logger.
static LOG_BRIDGE_INSTALLED: AtomicBool = AtomicBool::new(false);

/// `log` has no Fatal, so Fatal maps to Error.
fn level_filter(level: Severity) -> LevelFilter {
    match level {
        Severity::Trace => LevelFilter::Trace,
        Severity::Debug => LevelFilter::Debug,
        Severity::Info => LevelFilter::Info,
        Severity::Warn => LevelFilter::Warn,
        Severity::Error | Severity::Fatal => LevelFilter::Error,
    }
}

/// Forwards records of the `log` facade to a syncline logger.
struct LogBridge {
    logger: &'static Logger,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let location = record
            .file_static()
            .zip(record.line())
            .map(|(file, line)| Location::new(file, line));
        self.logger.log(record.level().into(), location, &[record.args()]);
    }

    fn flush(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The process-wide logger was already set up, explicitly or by a log call.
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => f.write_str("the global logger is already initialized"),
        }
    }
}

impl std::error::Error for InitError {}

/// Builder for configuring and initializing a logger.
pub struct ConfigBuilder {
    config: ConfigSnapshot,
    sink: Option<Sink>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            config: LogConfig::from_env().snapshot(),
            sink: None,
        }
    }
}

impl ConfigBuilder {
    fn into_logger(self) -> Logger {
        let Self { config, sink } = self;
        Logger::new(LogConfig::new(config), sink.unwrap_or_else(Sink::stderr))
    }

    /// Sets the minimum severity that gets written.
    pub fn with_level(self, level: Severity) -> Self {
        Self {
            config: ConfigSnapshot {
                minimum_level: level,
                ..self.config
            },
            ..self
        }
    }
    /// Prefix lines with the calling thread's identifier.
    pub fn with_thread_id(self, yes: bool) -> Self {
        Self {
            config: ConfigSnapshot {
                include_thread_id: yes,
                ..self.config
            },
            ..self
        }
    }
    /// Suffix lines with the `(file:line)` of the call site.
    pub fn with_location(self, yes: bool) -> Self {
        Self {
            config: ConfigSnapshot {
                include_location: yes,
                ..self.config
            },
            ..self
        }
    }
    /// Wrap lines in ANSI colour codes.
    pub fn with_colours(self, yes: bool) -> Self {
        Self {
            config: ConfigSnapshot {
                use_colours: yes,
                ..self.config
            },
            ..self
        }
    }
    /// Writes to `writer` instead of stderr.
    pub fn with_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        Self {
            sink: Some(Sink::new(writer)),
            ..self
        }
    }
    /// Builds a standalone logger, independent of the process-wide one.
    pub fn build(self) -> Arc<Logger> {
        Arc::new(self.into_logger())
    }
    /// Installs the process-wide logger and registers it as the `log` facade backend,
    /// with the facade's max level following [`set_minimum_level`].
    /// If another `log` backend is already registered, only the syncline macros use this logger.
    pub fn init_global(self) -> Result<&'static Logger, InitError> {
        let mut installed = false;
        let logger = GLOBAL_LOGGER.get_or_init(|| {
            installed = true;
            self.into_logger()
        });
        if !installed {
            return Err(InitError::AlreadyInitialized);
        }
        if log::set_boxed_logger(Box::new(LogBridge { logger })).is_ok() {
            LOG_BRIDGE_INSTALLED.store(true, Ordering::Relaxed);
            log::set_max_level(level_filter(logger.config().minimum_level()));
        }
        Ok(logger)
    }
}

/// Returns a ConfigBuilder seeded from the environment.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

/// Also moves the `log` facade's max level, so disabled `log::*!` calls skip
/// their arguments too. Changing the level through `logger().config()` does not.
pub fn set_minimum_level(level: Severity) {
    logger().config().set_minimum_level(level);
    if LOG_BRIDGE_INSTALLED.load(Ordering::Relaxed) {
        log::set_max_level(level_filter(level));
    }
}

pub fn minimum_level() -> Severity {
    logger().config().minimum_level()
}

pub fn set_include_thread_id(yes: bool) {
    logger().config().set_include_thread_id(yes);
}

pub fn include_thread_id() -> bool {
    logger().config().include_thread_id()
}

pub fn set_include_location(yes: bool) {
    logger().config().set_include_location(yes);
}

pub fn include_location() -> bool {
    logger().config().include_location()
}

pub fn set_use_colours(yes: bool) {
    logger().config().set_use_colours(yes);
}

pub fn use_colours() -> bool {
    logger().config().use_colours()
}

pub fn is_enabled(level: Severity) -> bool {
    logger().is_enabled(level)
}
