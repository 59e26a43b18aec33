//! Text listing of scanned entries
//!
//! Each entry is printed as `[DIR]  name (size)` or `[FILE] name (size)`.
//! The directory/file tag comes from a fresh stat at render time, so an
//! entry removed after the scan stops the listing with an error.

use std::fs;
use std::io::Write;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::error::{Error, Result};
use crate::scan::Entry;

use super::config::OutputConfig;
use super::format::format_size;

pub const EMPTY_MESSAGE: &str = "No files or directories found.";

/// Print the listing to stdout.
pub fn print_listing(entries: &[Entry], config: &OutputConfig) -> Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    render(entries, &mut stdout)
}

/// Write one line per entry, or the empty message when there are none.
pub fn render<W: WriteColor>(entries: &[Entry], out: &mut W) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
        return Ok(());
    }

    for entry in entries {
        let is_dir = fs::symlink_metadata(&entry.path)
            .map_err(|e| Error::io(&entry.path, e))?
            .is_dir();
        write_line(out, &entry.name(), is_dir, entry.size)?;
    }

    out.flush()?;
    Ok(())
}

fn write_line<W: WriteColor>(out: &mut W, name: &str, is_dir: bool, size: u64) -> Result<()> {
    if is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "[DIR]  {}", name)?;
    } else {
        write!(out, "[FILE] {}", name)?;
    }
    out.reset()?;

    write!(out, " ")?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "({})", format_size(size))?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}
