//! Fixed-size worker pool draining the work queue.
//!
//! Workers run on a dedicated rayon pool with exactly one thread per worker,
//! since each worker blocks in `pop_or_wait` for its whole lifetime. The
//! producer runs on the calling thread inside the same scope, so `drive`
//! returns only after every worker has exited.

use std::error::Error as _;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::queue::WorkQueue;
use crate::touch::Toucher;

/// Worker count used when none is requested: the host's parallelism, or 1
/// if it cannot be determined.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Per-run totals across all workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub touched: usize,
    pub failed: usize,
    pub bytes_read: u64,
}

#[derive(Default)]
struct Counters {
    touched: AtomicUsize,
    failed: AtomicUsize,
    bytes_read: AtomicU64,
}

impl Counters {
    fn snapshot(&self) -> PoolStats {
        PoolStats {
            touched: self.touched.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
        }
    }
}

/// Signals the queue done when dropped, including while unwinding out of a
/// panicking producer, so no worker is left waiting.
struct DoneGuard<'a>(&'a WorkQueue<PathBuf>);

impl Drop for DoneGuard<'_> {
    fn drop(&mut self) {
        self.0.signal_done();
    }
}

pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool of `workers` threads. `0` means [`default_worker_count`].
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let workers = if workers == 0 {
            default_worker_count()
        } else {
            workers
        };
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("hydrate-worker-{}", i))
            .build()?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Start the workers, run `producer` on the calling thread, then signal
    /// the queue done and wait for every worker to exit.
    pub fn drive<R, P>(
        &self,
        queue: &WorkQueue<PathBuf>,
        toucher: &Toucher<'_>,
        producer: P,
    ) -> (R, PoolStats)
    where
        P: FnOnce() -> R,
    {
        let counters = Counters::default();

        let result = self.pool.in_place_scope(|s| {
            for id in 0..self.workers {
                let counters = &counters;
                s.spawn(move |_| run_worker(id, queue, toucher, counters));
            }

            let _done = DoneGuard(queue);
            producer()
        });

        (result, counters.snapshot())
    }
}

fn run_worker(id: usize, queue: &WorkQueue<PathBuf>, toucher: &Toucher<'_>, counters: &Counters) {
    tracing::debug!(worker = id, "worker started");
    let mut handled = 0usize;

    while let Some(path) = queue.pop_or_wait() {
        handled += 1;
        match toucher.touch(&path) {
            Ok(bytes) => {
                counters.touched.fetch_add(1, Ordering::Relaxed);
                counters.bytes_read.fetch_add(bytes as u64, Ordering::Relaxed);
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                toucher.console().err_line(&e.to_string());
                if let Some(cause) = e.source() {
                    tracing::debug!(worker = id, path = %path.display(), cause = %cause, "touch failed");
                }
            }
        }
    }

    tracing::debug!(worker = id, handled, "worker exiting");
}
