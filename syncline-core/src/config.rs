use std::sync::{
    LazyLock,
    atomic::{AtomicBool, AtomicU8, Ordering},
};

use derive_from_env::FromEnv;

use crate::level::Severity;

/// Settings read from `SYNCLINE_*` environment variables.
#[derive(FromEnv)]
#[from_env(prefix = "SYNCLINE")]
#[allow(non_snake_case)]
pub struct SynclineEnv {
    #[from_env(default = "info")]
    pub LEVEL: String,
    #[from_env(default = "true")]
    pub THREAD_ID: String,
    #[from_env(default = "false")]
    pub LOCATION: String,
    #[from_env(default = "true")]
    pub COLOURS: String,
}

/// `None` only when a variable is not valid unicode.
pub static SYNCLINE_ENV: LazyLock<Option<SynclineEnv>> =
    LazyLock::new(|| SynclineEnv::from_env().ok());

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl From<&SynclineEnv> for ConfigSnapshot {
    /// Each field falls back to its default on its own when unparsable.
    fn from(env: &SynclineEnv) -> Self {
        let defaults = ConfigSnapshot::default();
        Self {
            minimum_level: env.LEVEL.parse().unwrap_or(defaults.minimum_level),
            include_thread_id: parse_flag(&env.THREAD_ID).unwrap_or(defaults.include_thread_id),
            include_location: parse_flag(&env.LOCATION).unwrap_or(defaults.include_location),
            use_colours: parse_flag(&env.COLOURS).unwrap_or(defaults.use_colours),
        }
    }
}

/// One consistent read of every setting, taken once per log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub minimum_level: Severity,
    pub include_thread_id: bool,
    pub include_location: bool,
    pub use_colours: bool,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            minimum_level: Severity::Info,
            include_thread_id: true,
            include_location: false,
            use_colours: true,
        }
    }
}

/// Runtime settings of a logger.
///
/// Every field is its own atomic: updates never tear and never block readers,
/// but two fields changed back to back may be observed in either order.
#[derive(Debug)]
pub struct LogConfig {
    minimum_level: AtomicU8,
    include_thread_id: AtomicBool,
    include_location: AtomicBool,
    use_colours: AtomicBool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(ConfigSnapshot::default())
    }
}

impl LogConfig {
    pub fn new(initial: ConfigSnapshot) -> Self {
        Self {
            minimum_level: AtomicU8::new(initial.minimum_level as u8),
            include_thread_id: AtomicBool::new(initial.include_thread_id),
            include_location: AtomicBool::new(initial.include_location),
            use_colours: AtomicBool::new(initial.use_colours),
        }
    }

    /// Configuration seeded from `SYNCLINE_LEVEL`, `SYNCLINE_THREAD_ID`,
    /// `SYNCLINE_LOCATION` and `SYNCLINE_COLOURS`.
    pub fn from_env() -> Self {
        match SYNCLINE_ENV.as_ref() {
            Some(env) => Self::new(env.into()),
            None => Self::default(),
        }
    }

    pub fn set_minimum_level(&self, level: Severity) {
        self.minimum_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn minimum_level(&self) -> Severity {
        Severity::from_repr(self.minimum_level.load(Ordering::Relaxed)).unwrap_or(Severity::Info)
    }

    pub fn set_include_thread_id(&self, yes: bool) {
        self.include_thread_id.store(yes, Ordering::Relaxed);
    }

    pub fn include_thread_id(&self) -> bool {
        self.include_thread_id.load(Ordering::Relaxed)
    }

    pub fn set_include_location(&self, yes: bool) {
        self.include_location.store(yes, Ordering::Relaxed);
    }

    pub fn include_location(&self) -> bool {
        self.include_location.load(Ordering::Relaxed)
    }

    pub fn set_use_colours(&self, yes: bool) {
        self.use_colours.store(yes, Ordering::Relaxed);
    }

    pub fn use_colours(&self) -> bool {
        self.use_colours.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_enabled(&self, level: Severity) -> bool {
        level as u8 >= self.minimum_level.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            minimum_level: self.minimum_level(),
            include_thread_id: self.include_thread_id(),
            include_location: self.include_location(),
            use_colours: self.use_colours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.minimum_level(), Severity::Info);
        assert!(config.include_thread_id());
        assert!(!config.include_location());
        assert!(config.use_colours());
    }

    #[test]
    fn test_setters_are_independent() {
        let config = LogConfig::default();
        config.set_include_location(true);
        config.set_use_colours(false);
        assert_eq!(
            config.snapshot(),
            ConfigSnapshot {
                minimum_level: Severity::Info,
                include_thread_id: true,
                include_location: true,
                use_colours: false,
            }
        );
        config.set_include_thread_id(false);
        config.set_minimum_level(Severity::Trace);
        assert!(config.include_location());
        assert!(!config.use_colours());
        assert!(!config.include_thread_id());
        assert_eq!(config.minimum_level(), Severity::Trace);
    }

    #[test]
    fn test_is_enabled_matrix() {
        let config = LogConfig::default();
        for minimum in Severity::ALL {
            config.set_minimum_level(minimum);
            for level in Severity::ALL {
                assert_eq!(config.is_enabled(level), level >= minimum, "{level} vs {minimum}");
            }
        }
    }

    fn env(level: &str, thread_id: &str, location: &str, colours: &str) -> SynclineEnv {
        SynclineEnv {
            LEVEL: level.into(),
            THREAD_ID: thread_id.into(),
            LOCATION: location.into(),
            COLOURS: colours.into(),
        }
    }

    #[test]
    fn test_env_values_seed_every_field() {
        let snapshot = ConfigSnapshot::from(&env("warn", "false", "TRUE", "0"));
        assert_eq!(
            snapshot,
            ConfigSnapshot {
                minimum_level: Severity::Warn,
                include_thread_id: false,
                include_location: true,
                use_colours: false,
            }
        );
    }

    #[test]
    fn test_env_unknown_level_falls_back_to_info() {
        let snapshot = ConfigSnapshot::from(&env("verbose", "true", "true", "true"));
        assert_eq!(snapshot.minimum_level, Severity::Info);
        assert!(snapshot.include_location);
    }

    #[test]
    fn test_env_bad_flag_only_resets_that_flag() {
        let snapshot = ConfigSnapshot::from(&env("error", "maybe", "true", "yes"));
        assert_eq!(
            snapshot,
            ConfigSnapshot {
                minimum_level: Severity::Error,
                include_thread_id: true,
                include_location: true,
                use_colours: true,
            }
        );
    }

    #[test]
    fn test_from_env_reads_variables() {
        // only test in this crate touching SYNCLINE_* variables
        unsafe {
            std::env::set_var("SYNCLINE_LEVEL", "debug");
            std::env::set_var("SYNCLINE_LOCATION", "on");
            std::env::set_var("SYNCLINE_COLOURS", "nope");
            std::env::remove_var("SYNCLINE_THREAD_ID");
        }
        let env = SynclineEnv::from_env().unwrap();
        assert_eq!(env.THREAD_ID, "true");
        assert_eq!(
            ConfigSnapshot::from(&env),
            ConfigSnapshot {
                minimum_level: Severity::Debug,
                include_thread_id: true,
                include_location: true,
                use_colours: true,
            }
        );
        assert_eq!(LogConfig::from_env().minimum_level(), Severity::Debug);
        unsafe {
            std::env::remove_var("SYNCLINE_LEVEL");
            std::env::remove_var("SYNCLINE_LOCATION");
            std::env::remove_var("SYNCLINE_COLOURS");
        }
    }

    #[test]
    fn test_concurrent_writes_never_tear() {
        let config = Arc::new(LogConfig::default());
        let writers: Vec<_> = (0..4)
            .map(|i| {
                let config = config.clone();
                std::thread::spawn(move || {
                    for j in 0..1000 {
                        config.set_minimum_level(Severity::ALL[(i + j) % Severity::ALL.len()]);
                        config.set_use_colours(j % 2 == 0);
                    }
                })
            })
            .collect();
        for _ in 0..1000 {
            // any observed level must be one of the six valid ones
            let level = config.minimum_level.load(Ordering::Relaxed);
            assert!(Severity::from_repr(level).is_some());
        }
        for w in writers {
            w.join().unwrap();
        }
    }
}
