//! Reading the head of a file so the sync provider fetches its contents.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::console::Console;
use crate::error::TouchError;
use crate::sanitize::sanitize;

/// Number of leading bytes read from each file.
pub const PREFIX_LEN: usize = 1024;

/// Opens files and reads their first [`PREFIX_LEN`] bytes.
pub struct Toucher<'a> {
    console: &'a Console,
    debug: bool,
}

impl<'a> Toucher<'a> {
    pub fn new(console: &'a Console, debug: bool) -> Self {
        Self { console, debug }
    }

    pub fn console(&self) -> &'a Console {
        self.console
    }

    /// Touch one file, returning how many bytes were read.
    ///
    /// Files shorter than [`PREFIX_LEN`] are not an error. The file handle
    /// is closed before this returns on every path.
    pub fn touch(&self, path: &Path) -> Result<usize, TouchError> {
        if path.as_os_str().is_empty() {
            return Err(TouchError::EmptyPath);
        }

        let file = File::open(path).map_err(|source| TouchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        if self.debug {
            self.console.out_line(&format!(
                "Downloading file: {}",
                sanitize(&path.to_string_lossy())
            ));
        }

        let read = io::copy(&mut file.take(PREFIX_LEN as u64), &mut io::sink()).map_err(
            |source| TouchError::Read {
                path: path.to_path_buf(),
                source,
            },
        )?;

        tracing::trace!(path = %path.display(), bytes = read, "touched");
        Ok(read as usize)
    }
}
