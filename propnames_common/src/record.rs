//! Line records of `PropertyValueAliases.txt`.

use regex::Regex;

use crate::error::Result;

/// One matching line of the alias table.
///
/// `long` is always present on a match; the other fields are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// Short alias (field 1). May hold the placeholder token `n/a`.
    pub short: Option<String>,
    /// Long alias (field 2). The emitted identifier derives from this field.
    pub long: String,
    /// Numeric or extra alias (field 4).
    pub extra: Option<String>,
}

/// Compiled line pattern for one property token.
///
/// A line matches only if it begins with the property token at column 0,
/// case-sensitively, followed by semicolon-delimited fields. The pattern is
/// not anchored at line end, so trailing commentary never defeats a match.
#[derive(Debug)]
pub struct RecordPattern {
    regex: Regex,
}

impl RecordPattern {
    /// Compiles the line pattern for `property`.
    ///
    /// The token is escaped before interpolation, so a metacharacter in the
    /// argument degrades to a non-matching literal rather than a pattern
    /// error.
    pub fn new(property: &str) -> Result<Self> {
        let regex = Regex::new(&format!(
            r"^{}\s*;\s*([\w/-]+)\s*;\s*([\w-]+)(\s*;\s*([\w-]+))?",
            regex::escape(property)
        ))?;
        Ok(Self { regex })
    }

    /// Extracts the record from `line`, or `None` when the line does not
    /// belong to this property.
    pub fn parse(&self, line: &str) -> Option<AliasRecord> {
        let caps = self.regex.captures(line)?;
        Some(AliasRecord {
            short: caps.get(1).map(|m| m.as_str().to_string()),
            long: caps[2].to_string(),
            extra: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}
