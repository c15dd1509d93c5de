use std::fmt::{self, Display, Write};

use crate::{
    clock::{thread_identity, timestamp},
    config::ConfigSnapshot,
    level::{RESET_SEQUENCE, Severity},
};

/// Substituted for a message part whose `Display` impl fails.
pub const PLACEHOLDER: &str = "<?>";

/// Call site of a log statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Concatenates the parts in order, without separators.
pub fn join_parts(parts: &[&dyn Display]) -> String {
    let mut message = String::new();
    for part in parts {
        let mark = message.len();
        if write!(message, "{part}").is_err() {
            message.truncate(mark);
            message.push_str(PLACEHOLDER);
        }
    }
    message
}

/// A single log event with its metadata captured at the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub location: Option<Location>,
    pub message: String,
    pub timestamp: String,
    pub thread: Option<String>,
}

impl Record {
    /// Captures time and, when the snapshot asks for it, the calling thread.
    pub fn capture(
        severity: Severity,
        location: Option<Location>,
        parts: &[&dyn Display],
        config: &ConfigSnapshot,
    ) -> Self {
        Self {
            severity,
            location,
            message: join_parts(parts),
            timestamp: timestamp(),
            thread: config.include_thread_id.then(thread_identity),
        }
    }

    /// Renders the record as one newline-terminated line.
    pub fn render(&self, config: &ConfigSnapshot) -> String {
        let style = self.severity.style();
        let mut line = String::with_capacity(self.message.len() + 64);
        if config.use_colours {
            line.push_str(&style.start_sequence());
        }
        line.push('[');
        line.push_str(&self.timestamp);
        line.push(']');
        if config.include_thread_id
            && let Some(thread) = &self.thread
        {
            line.push_str(" [");
            line.push_str(thread);
            line.push(']');
        }
        line.push_str(" [");
        line.push_str(style.name);
        line.push_str("] ");
        line.push_str(&self.message);
        if config.include_location
            && let Some(location) = self.location
        {
            let _ = write!(line, " ({location})");
        }
        if config.use_colours {
            line.push_str(RESET_SEQUENCE);
        }
        line.push('\n');
        line
    }
}

/// Builds the full output line for one log call.
pub fn format_line(
    severity: Severity,
    location: Option<Location>,
    parts: &[&dyn Display],
    config: &ConfigSnapshot,
) -> String {
    Record::capture(severity, location, parts, config).render(config)
}
