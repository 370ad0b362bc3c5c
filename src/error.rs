//! Error types for hydrate
//!
//! Per-file failures (`TouchError`) are reported and skipped by the worker
//! pool. Enumeration failures (`WalkError`) stop the walk and surface as
//! `HydrateError::Walk`, which the CLI maps to exit code 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a traversal run.
#[derive(Error, Debug)]
pub enum HydrateError {
    /// Root path is missing or is not a directory
    #[error("Invalid directory path: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// A directory could not be enumerated during the walk
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Worker threads could not be started
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Fatal enumeration failure raised by the tree walker.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Directory that failed to enumerate.
    pub fn path(&self) -> &std::path::Path {
        match self {
            WalkError::ReadDir { path, .. } => path,
        }
    }
}

/// Failure to touch a single file. Never fatal to the run.
#[derive(Error, Debug)]
pub enum TouchError {
    #[error("Encountered an empty file path.")]
    EmptyPath,

    #[error("Unable to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HydrateError>;
