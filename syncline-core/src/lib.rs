//! # syncline-core
//! Core engine for syncline - atomic configuration, line formatting and a serialized output sink.

mod clock;
mod config;
mod format;
mod level;
mod logger;
mod sink;

pub use clock::{TIMESTAMP_FORMAT, thread_identity, timestamp};
pub use config::{ConfigSnapshot, LogConfig, SYNCLINE_ENV, SynclineEnv};
pub use format::{Location, PLACEHOLDER, Record, format_line, join_parts};
pub use level::{LevelStyle, ParseSeverityError, RESET_SEQUENCE, Severity};
pub use logger::Logger;
pub use sink::{LogStderr, SharedBuffer, Sink};
