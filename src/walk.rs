//! Depth-first directory enumeration feeding the work queue

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use crate::error::WalkError;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Enumerate at most this many directory levels, the root being the
    /// first. `Some(1)` lists only the root's own entries.
    pub max_depth: Option<usize>,
}

/// Counts gathered during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Regular files handed to the sink
    pub files: usize,
    /// Directories enumerated, root included
    pub directories: usize,
}

enum EntryKind {
    File,
    Dir,
    Other,
}

/// Recursive walker that hands every regular file to a sink as it is found.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, calling `sink` once for every regular file.
    ///
    /// Stops at the first directory that cannot be enumerated. Files already
    /// handed to `sink` before the failure stay handed off.
    pub fn walk<F>(&self, root: &Path, sink: &mut F) -> Result<WalkStats, WalkError>
    where
        F: FnMut(PathBuf),
    {
        let mut stats = WalkStats::default();
        self.walk_dir(root, 0, sink, &mut stats)?;
        Ok(stats)
    }

    fn walk_dir<F>(
        &self,
        dir: &Path,
        depth: usize,
        sink: &mut F,
        stats: &mut WalkStats,
    ) -> Result<(), WalkError>
    where
        F: FnMut(PathBuf),
    {
        if self.at_max_depth(depth) {
            return Ok(());
        }

        let read_error = |source| WalkError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir)
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        entries.sort_by_key(|e| e.file_name());
        stats.directories += 1;

        for entry in entries {
            let path = entry.path();
            match classify(&entry) {
                EntryKind::File => {
                    stats.files += 1;
                    sink(path);
                }
                EntryKind::Dir => {
                    self.walk_dir(&path, depth + 1, sink, stats)?;
                }
                EntryKind::Other => {
                    tracing::trace!(path = %path.display(), "skipping non-regular entry");
                }
            }
        }

        Ok(())
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Symlinks to files count as files (reading them hydrates the target).
/// Symlinks to directories are never descended, so link cycles cannot loop.
fn classify(entry: &DirEntry) -> EntryKind {
    let Ok(file_type) = entry.file_type() else {
        return EntryKind::Other;
    };

    if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() {
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    } else {
        EntryKind::Other
    }
}
