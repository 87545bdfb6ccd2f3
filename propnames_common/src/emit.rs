//! Emission of initializer statements.

use std::io::{self, Write};

use crate::ident::build_identifier;
use crate::record::AliasRecord;

/// Placeholder marking "no short name" in the source file.
const NO_SHORT_ALIAS: &str = "n/a";

/// Writes the initializer statement for one record.
///
/// Qualifying aliases chain onto a single assignment sharing one terminating
/// `;\n`, matching the downstream name tables:
/// `names_[L"Arab"] = names_[L"Arabic"] = ARABIC;`. The short alias is
/// dropped when it is the `n/a` placeholder, the long alias is dropped when
/// it repeats the short one, and the identifier is always built from the
/// long alias.
pub fn write_record<W: Write>(out: &mut W, record: &AliasRecord) -> io::Result<()> {
    if let Some(short) = record.short.as_deref().filter(|&s| s != NO_SHORT_ALIAS) {
        write!(out, "names_[L\"{short}\"] = ")?;
    }
    if record.short.as_deref() != Some(record.long.as_str()) {
        write!(out, "names_[L\"{}\"] = ", record.long)?;
    }
    if let Some(extra) = record.extra.as_deref() {
        write!(out, "names_[L\"{extra}\"] = ")?;
    }
    writeln!(out, "{};", build_identifier(&record.long))
}
