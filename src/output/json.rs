//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::scan::Entry;

/// Print entries as a pretty-printed JSON array to stdout.
pub fn print_json(entries: &[Entry]) -> Result<()> {
    let stdout = io::stdout();
    write_json(entries, &mut stdout.lock())
}

pub fn write_json<W: Write>(entries: &[Entry], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
