use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::scraping::extract_meta::MetadataRecord;

/// Writes the `saved:` line followed by one `name: value` line per field.
pub fn print_metadata<W: Write>(out: &mut W, saved_path: &Path, metadata: &MetadataRecord) -> io::Result<()> {
    writeln!(out, "{} {}", "saved:".green(), saved_path.display())?;
    for (name, value) in metadata.fields() {
        writeln!(out, "{}: {}", name.bold(), value)?;
    }
    out.flush()
}

/// Writes the one-line failure report, `error: ` followed by the whole
/// context chain.
pub fn print_error<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "error: {:#}", err)?;
    out.flush()
}
