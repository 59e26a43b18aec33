//! Ordering entries by size

use clap::ValueEnum;

use super::entry::Entry;

/// Direction of the size sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    #[value(name = "asc")]
    Ascending,
    /// Largest first
    #[value(name = "desc")]
    Descending,
}

/// Sort entries by size only. The sort is stable, so equal sizes keep
/// their incoming order in either direction.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    match order {
        SortOrder::Ascending => entries.sort_by(|a, b| a.size.cmp(&b.size)),
        SortOrder::Descending => entries.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}
