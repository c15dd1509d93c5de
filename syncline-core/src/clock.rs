use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Current local time as `YYYY-MM-DD HH:MM:SS.mmm`.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

static NEXT_THREAD_NUMBER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_IDENTITY: String = {
        let number = NEXT_THREAD_NUMBER.fetch_add(1, Ordering::Relaxed);
        match std::thread::current().name() {
            Some(name) => format!("{name}:{number}"),
            None => number.to_string(),
        }
    };
}

/// Identifier of the calling thread, `<name>:<n>` for named threads and `<n>` otherwise.
/// The number is handed out on first use and never reused within the process.
pub fn thread_identity() -> String {
    THREAD_IDENTITY
        .try_with(String::clone)
        .unwrap_or_else(|_| String::from("?"))
}
