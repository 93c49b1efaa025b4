//! Per-extension counts recorded by a sort run.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

const DELIMITER: char = ',';

/// Extension → number of files moved into its bucket during one run.
///
/// Every extension seen in the scan has a row, so a run that moved nothing
/// still lists the extensions it found with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortSummary {
    counts: BTreeMap<String, usize>,
}

impl SortSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extension without counting a move.
    pub fn observe(&mut self, extension: &str) {
        self.counts.entry(extension.to_string()).or_insert(0);
    }

    pub fn record_move(&mut self, extension: &str) {
        *self.counts.entry(extension.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, extension: &str) -> Option<usize> {
        self.counts.get(extension).copied()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(ext, count)| (ext.as_str(), *count))
    }

    /// Write the two-column `extension,count` table, one row per extension.
    pub fn write_table(&self, out: &mut impl Write) -> io::Result<()> {
        for (extension, count) in self.rows() {
            writeln!(out, "{}{DELIMITER}{}", escape_field(extension), count)?;
        }
        Ok(())
    }

    pub fn to_table(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_table(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
