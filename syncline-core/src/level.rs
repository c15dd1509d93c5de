use std::{fmt, str::FromStr};

use colored::Color;

/// Severity of a log record, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub const fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Trace),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Error),
            5 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Upper-case display name, as printed between brackets.
    pub const fn name(self) -> &'static str {
        self.style().name
    }

    pub const fn style(self) -> LevelStyle {
        match self {
            Severity::Trace => LevelStyle::new("TRACE", Color::BrightBlack, None),
            Severity::Debug => LevelStyle::new("DEBUG", Color::Cyan, None),
            Severity::Info => LevelStyle::new("INFO", Color::White, None),
            Severity::Warn => LevelStyle::new("WARN", Color::Yellow, None),
            Severity::Error => LevelStyle::new("ERROR", Color::Red, None),
            Severity::Fatal => LevelStyle::new("FATAL", Color::BrightWhite, Some(Color::Red)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Trace,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Display name and ANSI colours of a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub name: &'static str,
    pub foreground: Color,
    pub background: Option<Color>,
}

impl LevelStyle {
    const FALLBACK: LevelStyle = LevelStyle::new("UNKNOWN", Color::White, None);

    const fn new(name: &'static str, foreground: Color, background: Option<Color>) -> Self {
        Self {
            name,
            foreground,
            background,
        }
    }

    /// Style for a raw severity value. Values outside the known range get a
    /// neutral `UNKNOWN` style instead of failing.
    pub fn of_repr(value: u8) -> Self {
        Severity::from_repr(value)
            .map(Severity::style)
            .unwrap_or(Self::FALLBACK)
    }

    /// SGR parameters, e.g. `31` or `41;97`.
    pub fn sgr_code(&self) -> String {
        let foreground = self.foreground.to_fg_str();
        match self.background {
            Some(background) => format!("{};{foreground}", background.to_bg_str()),
            None => foreground.to_string(),
        }
    }

    /// Escape sequence switching the terminal to this style.
    pub fn start_sequence(&self) -> String {
        format!("\x1b[{}m", self.sgr_code())
    }
}

pub const RESET_SEQUENCE: &str = "\x1b[0m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Severity::Trace < Severity::Fatal);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = Severity::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
        assert_eq!(Severity::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_colour_codes() {
        let codes: Vec<_> = Severity::ALL.iter().map(|s| s.style().sgr_code()).collect();
        assert_eq!(codes, ["90", "36", "37", "33", "31", "41;97"]);
        assert_eq!(Severity::Error.style().start_sequence(), "\x1b[31m");
    }

    #[test]
    fn test_repr_round_trip_and_fallback() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_repr(severity as u8), Some(severity));
        }
        assert_eq!(Severity::from_repr(6), None);
        let unknown = LevelStyle::of_repr(42);
        assert_eq!(unknown.name, "UNKNOWN");
        assert_eq!(unknown.sgr_code(), "37");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!(" Fatal ".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Trace), Severity::Trace);
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
    }
}
