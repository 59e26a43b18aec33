//! Output formatting for scanned entries
//!
//! - `console`: `[DIR]`/`[FILE]` text listing, optionally colored
//! - `json`: pretty-printed JSON array

mod config;
mod console;
mod format;
mod json;

pub use config::OutputConfig;
pub use console::{EMPTY_MESSAGE, print_listing, render};
pub use format::format_size;
pub use json::{print_json, write_json};
