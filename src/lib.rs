//! Hydrate - force cloud-sync placeholders to download by touching every file

pub mod console;
pub mod error;
pub mod pool;
pub mod queue;
pub mod run;
pub mod sanitize;
pub mod touch;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use console::Console;
pub use error::{HydrateError, TouchError, WalkError};
pub use pool::{PoolStats, WorkerPool, default_worker_count};
pub use queue::WorkQueue;
pub use run::{RunConfig, RunSummary, run_traversal};
pub use sanitize::sanitize;
pub use touch::{PREFIX_LEN, Toucher};
pub use walk::{TreeWalker, WalkStats, WalkerConfig};
