//! Directory scanning and size aggregation
//!
//! `DirectoryLister` sizes each immediate child of a root directory. Files
//! report their own length; directories report the total length of every
//! file beneath them. `sort_entries` then orders the result by size.

mod config;
mod entry;
mod lister;
mod size;
mod sort;

pub use config::ScanConfig;
pub use entry::Entry;
pub use lister::DirectoryLister;
pub use sort::{SortOrder, sort_entries};
