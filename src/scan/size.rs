//! Aggregated size of a directory tree

use std::io;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::trace;

use crate::error::{Error, Result};

use super::config::IgnoreSet;
use super::entry::display_name;

/// Sum the byte lengths of every file beneath `dir`, at any depth.
///
/// Directory nodes contribute nothing. Symlinks are not followed and count
/// with their own length. Any walk error aborts the sum.
pub(crate) fn dir_size(dir: &Path, ignore: &IgnoreSet) -> Result<u64> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false).follow_links(false);

    if !ignore.is_empty() {
        let ignore = ignore.clone();
        builder.filter_entry(move |entry| {
            entry.depth() == 0 || !ignore.matches(&display_name(entry.path()))
        });
    }

    let mut total = 0u64;
    for result in builder.build() {
        let entry = result.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        let len = entry
            .metadata()
            .map_err(|e| walk_error(entry.path(), e))?
            .len();
        trace!(path = %entry.path().display(), len, "counted file");
        total += len;
    }

    Ok(total)
}

fn walk_error(fallback: &Path, err: ignore::Error) -> Error {
    let path = error_path(&err).unwrap_or(fallback).to_path_buf();
    let message = err.to_string();
    let source = match err.into_io_error() {
        Some(e) => innermost_io(e),
        None => io::Error::other(message),
    };
    Error::io(path, source)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// Strip wrappers that repeat the path, keeping the OS error underneath.
fn innermost_io(err: io::Error) -> io::Error {
    let mut code = err.raw_os_error();
    let mut cause = std::error::Error::source(&err);
    while let Some(e) = cause {
        if let Some(c) = e.downcast_ref::<io::Error>().and_then(io::Error::raw_os_error) {
            code = Some(c);
        }
        cause = e.source();
    }
    match code {
        Some(c) => io::Error::from_raw_os_error(c),
        None => err,
    }
}
