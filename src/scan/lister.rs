//! DirectoryLister - sizes the immediate children of a root directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::config::{IgnoreSet, ScanConfig};
use super::entry::Entry;
use super::size::dir_size;

/// Lists the immediate children of a directory with their aggregated sizes.
pub struct DirectoryLister {
    config: ScanConfig,
}

impl DirectoryLister {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` one level deep, sizing directories recursively.
    ///
    /// Entries come back in file name order. The first error on any path
    /// aborts the scan and no partial result is returned.
    pub fn list_children(&self, root: &Path) -> Result<Vec<Entry>> {
        let ignore = self.config.compile()?;

        let meta = match fs::metadata(root) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::io(root, e)),
        };
        if !meta.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut children = fs::read_dir(root)
            .map_err(|e| Error::io(root, e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(root, e))?;
        children.sort_by_key(|c| c.file_name());

        let paths: Vec<PathBuf> = children
            .iter()
            .filter_map(|child| {
                let path = child.path();
                if ignore.matches(&child.file_name().to_string_lossy()) {
                    debug!(path = %path.display(), "ignored");
                    None
                } else {
                    Some(path)
                }
            })
            .collect();

        let entries = size_children(&paths, &ignore)?;
        info!(root = %root.display(), count = entries.len(), "scan complete");
        Ok(entries)
    }
}

/// Size each path in order. The first failure discards everything sized so far.
fn size_children(paths: &[PathBuf], ignore: &IgnoreSet) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let entry = size_child(path, ignore)?;
        debug!(path = %path.display(), is_dir = entry.is_dir, size = entry.size, "scanned");
        entries.push(entry);
    }
    Ok(entries)
}

fn size_child(path: &Path, ignore: &IgnoreSet) -> Result<Entry> {
    let meta = fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.is_dir() {
        Ok(Entry::new(path, true, dir_size(path, ignore)?))
    } else {
        Ok(Entry::new(path, false, meta.len()))
    }
}
