use std::{
    io::{self, Write},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

/// Writes through a fresh lock on the process's standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStderr;

impl Write for LogStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

/// In-memory writer whose clones all append to the same buffer.
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The one place where output is serialized.
///
/// Each `write_line` holds the lock for exactly one write and one flush, so
/// lines from different threads never interleave. Nothing is buffered across
/// calls and I/O failures are counted instead of returned.
pub struct Sink {
    writer: Mutex<Box<dyn Write + Send>>,
    failed_writes: AtomicU64,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            failed_writes: AtomicU64::new(0),
        }
    }

    pub fn stderr() -> Self {
        Self::new(LogStderr)
    }

    pub fn write_line(&self, line: &str) {
        let result = {
            // a panic inside a previous writer call must not disable logging
            let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
            writer
                .write_all(line.as_bytes())
                .and_then(|()| writer.flush())
        };
        if result.is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of lines lost to I/O errors so far.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("failed_writes", &self.failed_writes())
            .finish_non_exhaustive()
    }
}
