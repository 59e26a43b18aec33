//! The scanned entry type

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::output::format_size;

/// One immediate child of the scanned root with its aggregated size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
    /// File length, or the sum of all file lengths beneath a directory.
    pub size: u64,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir,
            size,
        }
    }

    /// Final path segment, as displayed in listings.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    File,
    Dir,
}

/// Serialized shape of an entry for JSON output.
#[derive(Serialize)]
struct JsonEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: EntryKind,
    size_bytes: u64,
    size_human: String,
}

impl Serialize for Entry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonEntry {
            name: self.name(),
            path: self.path.to_string_lossy().to_string(),
            kind: if self.is_dir {
                EntryKind::Dir
            } else {
                EntryKind::File
            },
            size_bytes: self.size,
            size_human: format_size(self.size),
        }
        .serialize(serializer)
    }
}
