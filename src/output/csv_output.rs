//! CSV serialization of the guideline table
//!
//! Every field is quoted, absent values are written as `""`, and records end
//! with `\n`. The header row holds the column names in table order.

use crate::table::GuidelineTable;
use crate::GuidelineError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the table to a CSV file, replacing any existing file
///
/// The CSV is written to `<path>.part` first and renamed onto `path` only
/// once it is complete, so a failed write never leaves a truncated file at
/// `path`.
///
/// # Arguments
///
/// * `table` - The assembled guideline table
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - The file was fully written and flushed
/// * `Err(GuidelineError)` - The file could not be created or written
pub fn write_csv(table: &GuidelineTable, path: &Path) -> Result<(), GuidelineError> {
    let part_path = part_path(path);

    let result = File::create(&part_path)
        .map_err(GuidelineError::from)
        .and_then(|file| write_csv_to(table, file))
        .and_then(|()| std::fs::rename(&part_path, path).map_err(GuidelineError::from));

    if result.is_err() {
        let _ = std::fs::remove_file(&part_path);
    }
    result
}

/// Sibling path the CSV is staged in before the final rename
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Writes the table as CSV to any writer
pub fn write_csv_to<W: Write>(table: &GuidelineTable, writer: W) -> Result<(), GuidelineError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
