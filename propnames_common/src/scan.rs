//! The line-by-line scan over `PropertyValueAliases.txt`.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::emit::write_record;
use crate::error::{PropNamesError, Result};
use crate::record::RecordPattern;

/// Fixed name of the alias table within the input directory.
pub const ALIASES_FILE_NAME: &str = "PropertyValueAliases.txt";

/// Joins an input directory with the fixed alias table filename.
///
/// A `/` is appended unless the directory already ends in `/` or `\`; both
/// separators are accepted as-is.
pub fn aliases_path(input_directory: &str) -> PathBuf {
    let mut path = String::from(input_directory);
    if !path.ends_with('/') && !path.ends_with('\\') {
        path.push('/');
    }
    path.push_str(ALIASES_FILE_NAME);
    PathBuf::from(path)
}

/// Scans the alias table at `path` for records of `property`, writing one
/// chained initializer statement per matching line to `out`.
///
/// The file is read to completion line by line; non-matching lines are
/// silently skipped. Returns the number of records emitted. Output already
/// written before a mid-scan failure is not suppressed.
pub fn scan_aliases<W: Write>(path: &Path, property: &str, out: &mut W) -> Result<usize> {
    let pattern = RecordPattern::new(property)?;
    let file = File::open(path).map_err(|source| PropNamesError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    let mut emitted = 0usize;
    loop {
        line.clear();
        // read_line keeps the terminator, so a trailing \r stays on the line.
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if let Some(record) = pattern.parse(&line) {
            write_record(out, &record)?;
            emitted += 1;
        }
    }
    debug!("emitted {emitted} records for property {property}");
    Ok(emitted)
}
