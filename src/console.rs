//! Serialized line output shared by all workers.

use std::io::{self, Write};

use parking_lot::Mutex;

type Sink = Box<dyn Write + Send>;

/// The process-wide stdout/stderr pair.
///
/// Each stream has its own lock, held only while a single line is written so
/// concurrent workers never interleave partial lines. No file I/O happens
/// under these locks.
pub struct Console {
    out: Mutex<Sink>,
    err: Mutex<Sink>,
}

impl Console {
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    /// Console bound to the real process streams.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Write one line to stdout.
    pub fn out_line(&self, line: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "failed to write to stdout");
        }
    }

    /// Write one line to stderr.
    pub fn err_line(&self, line: &str) {
        let mut err = self.err.lock();
        // Nowhere left to report a failed stderr write.
        let _ = writeln!(err, "{}", line).and_then(|_| err.flush());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdio()
    }
}
