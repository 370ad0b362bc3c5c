//! One traversal run: validate the root, start the pool, walk, drain, join.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::console::Console;
use crate::error::{HydrateError, Result};
use crate::pool::WorkerPool;
use crate::queue::WorkQueue;
use crate::touch::Toucher;
use crate::walk::{TreeWalker, WalkerConfig};

/// Settings fixed for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Print a `Downloading file:` line for every opened file
    pub debug: bool,
    /// Number of worker threads.
    /// 0 = auto-detect (host parallelism, or 1 if unknown)
    pub workers: usize,
    /// Enumerate at most this many directory levels; 1 = the root only
    pub max_depth: Option<usize>,
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub workers: usize,
    pub files_found: usize,
    pub directories: usize,
    pub touched: usize,
    pub failed: usize,
    pub bytes_read: u64,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Millisecond precision keeps the output readable.
        let elapsed = Duration::from_millis(self.elapsed.as_millis() as u64);
        write!(
            f,
            "touched {} of {} files in {} directories ({} failed, {} read) with {} workers in {}",
            self.touched,
            self.files_found,
            self.directories,
            self.failed,
            format_size(self.bytes_read),
            self.workers,
            humantime::format_duration(elapsed)
        )
    }
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Touch every regular file under `root`.
///
/// Workers start before the walk. If the walk fails, the queue is still
/// signalled done and the files queued so far are drained before the error
/// is returned.
pub fn run_traversal(root: &Path, config: &RunConfig, console: &Console) -> Result<RunSummary> {
    if !root.is_dir() {
        return Err(HydrateError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let start = Instant::now();
    let pool = WorkerPool::new(config.workers)?;
    tracing::debug!(workers = pool.workers(), root = %root.display(), "starting traversal");

    let queue: WorkQueue<PathBuf> = WorkQueue::new();
    let toucher = Toucher::new(console, config.debug);
    let walker = TreeWalker::new(WalkerConfig {
        max_depth: config.max_depth,
    });

    let (walked, pool_stats) = pool.drive(&queue, &toucher, || {
        walker.walk(root, &mut |path| queue.push(path))
    });

    let walk_stats = walked.inspect_err(|e| {
        tracing::debug!(path = %e.path().display(), "walk aborted, queued files were drained");
    })?;

    let summary = RunSummary {
        workers: pool.workers(),
        files_found: walk_stats.files,
        directories: walk_stats.directories,
        touched: pool_stats.touched,
        failed: pool_stats.failed,
        bytes_read: pool_stats.bytes_read,
        elapsed: start.elapsed(),
    };
    tracing::info!("{}", summary);
    Ok(summary)
}
