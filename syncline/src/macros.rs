/// Logs at an explicit severity.
///
/// Takes one or more `Display` parts, concatenated without separators;
/// `log!(level;)` with no parts does not compile. The parts are only
/// evaluated when the severity is enabled.
///
/// ```rust
/// use syncline::Severity;
///
/// syncline::log!(Severity::Warn; "retrying in ", 3, "s");
/// ```
///
/// ```compile_fail
/// syncline::info!();
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr; $($part:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level: $crate::Severity = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                ::core::option::Option::Some($crate::Location::new(::core::file!(), ::core::line!())),
                &[$(&$part as &dyn ::core::fmt::Display),+],
            );
        }
    }};
    ($level:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $crate::logger(), $level; $($part),+)
    };
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace). Needs at least one part, see [`log!`].
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Trace; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Trace; $($part),+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug). Needs at least one part, see [`log!`].
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Debug; $($part),+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info). Needs at least one part, see [`log!`].
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Info; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Info; $($part),+)
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn). Needs at least one part, see [`log!`].
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Warn; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Warn; $($part),+)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error). Needs at least one part, see [`log!`].
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Error; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Error; $($part),+)
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal). Needs at least one part
/// and does not abort.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal; $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::log!($crate::Severity::Fatal; $($part),+)
    };
}
