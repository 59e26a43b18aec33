//! dirsize - list the entries of a directory sorted by their total size

pub mod error;
pub mod logging;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputConfig, format_size, print_json, print_listing, render};
pub use scan::{DirectoryLister, Entry, ScanConfig, SortOrder, sort_entries};
