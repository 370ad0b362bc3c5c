//! Display normalization for paths printed in debug output.

use std::path::MAIN_SEPARATOR;

/// Collapse every run of `sep` into a single `sep`.
///
/// Scans left to right; a run of two or more separators becomes one, so the
/// result never contains a doubled separator and a second pass is a no-op.
///
/// # Example
///
/// ```
/// use hydrate::sanitize::collapse_separators;
///
/// assert_eq!(collapse_separators(r"a\\b\\c", '\\'), r"a\b\c");
/// assert_eq!(collapse_separators(r"a\b\c", '\\'), r"a\b\c");
/// assert_eq!(collapse_separators("//srv//share", '/'), "/srv/share");
/// ```
pub fn collapse_separators(path: &str, sep: char) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        if c == sep {
            if !prev_sep {
                out.push(c);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    out
}

/// Render a path for a `Downloading file:` line.
///
/// Uses the platform's main separator. On Windows the alternate `/`
/// separator is collapsed as well.
pub fn sanitize(path: &str) -> String {
    let collapsed = collapse_separators(path, MAIN_SEPARATOR);
    if cfg!(windows) {
        collapse_separators(&collapsed, '/')
    } else {
        collapsed
    }
}
