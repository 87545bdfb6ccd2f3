//! Property-value name table generator.
//!
//! Entry point for the `propnames` command-line tool. Scans
//! `PropertyValueAliases.txt` in the given input directory for the records of
//! one property and prints the initializer statements for its value aliases
//! to stdout, ready to be pasted into a generated name table.

use std::env;
use std::io::{self, Write};
use std::process;

use propnames_common::{PropNamesError, aliases_path, scan_aliases};
use tracing::info;

/// Runs the generator.
///
/// This function:
/// 1. Initializes logging (stderr only, so stdout stays clean)
/// 2. Validates the two positional arguments
/// 3. Assembles the input path
/// 4. Scans the alias table and prints the statements
fn main() -> Result<(), PropNamesError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} property-name input-directory", args[0]);
        process::exit(1);
    }
    let property = &args[1];
    let path = aliases_path(&args[2]);

    info!("reading {}", path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let emitted = scan_aliases(&path, property, &mut out)?;
    out.flush()?;

    info!("emitted {emitted} records for {property}");

    Ok(())
}
