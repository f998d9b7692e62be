//! Loading asset and edge records from disk.
//!
//! Two layouts are accepted, chosen by file extension:
//!
//! - `.jsonl` / `.ndjson`: one record per line. Loading is resilient: lines
//!   that fail to parse are skipped and reported as [`LoadWarning`]s.
//! - anything else: a single JSON array. A parse error fails the whole load.
//!
//! In both layouts records that parse but fail validation (empty IDs,
//! out-of-range scores) are skipped with a warning.

use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::{AssetRef, LineageEdge};
use crate::error::Result;

/// A non-fatal problem found while loading records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A JSONL line could not be parsed; the line is skipped.
    MalformedJson {
        /// 1-based line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// A record parsed but failed validation; the record is skipped.
    InvalidRecord {
        /// 1-based record position within the file
        record_number: usize,
        /// Identifying label for the record
        record: String,
        /// What was wrong
        error: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::InvalidRecord {
                record_number,
                record,
                error,
            } => write!(f, "record {record_number} ({record}): {error}"),
        }
    }
}

/// Records that can be loaded from a file.
pub trait Record: DeserializeOwned {
    /// Label used in warnings
    fn label(&self) -> String;

    /// Validate the record
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the record is unusable.
    fn validate(&self) -> std::result::Result<(), String>;
}

impl Record for AssetRef {
    fn label(&self) -> String {
        self.id.to_string()
    }

    fn validate(&self) -> std::result::Result<(), String> {
        AssetRef::validate(self)
    }
}

impl Record for LineageEdge {
    fn label(&self) -> String {
        self.effective_id()
    }

    fn validate(&self) -> std::result::Result<(), String> {
        LineageEdge::validate(self)
    }
}

/// Load and validate records from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if a JSON array file
/// fails to parse.
pub fn load_records<T: Record>(path: &Path) -> Result<(Vec<T>, Vec<LoadWarning>)> {
    let (parsed, mut warnings) = if is_json_lines(path) {
        read_json_lines(path)?
    } else {
        let reader = BufReader::new(File::open(path)?);
        (serde_json::from_reader::<_, Vec<T>>(reader)?, Vec::new())
    };

    let mut records = Vec::with_capacity(parsed.len());
    for (index, record) in parsed.into_iter().enumerate() {
        if let Err(error) = record.validate() {
            warnings.push(LoadWarning::InvalidRecord {
                record_number: index + 1,
                record: record.label(),
                error,
            });
            continue;
        }
        records.push(record);
    }

    if warnings.is_empty() {
        debug!(path = %path.display(), records = records.len(), "Loaded records");
    } else {
        warn!(
            path = %path.display(),
            records = records.len(),
            skipped = warnings.len(),
            "Loaded records with warnings"
        );
    }

    Ok((records, warnings))
}

/// Load assets from `path`. See [`load_records`].
///
/// # Errors
///
/// See [`load_records`].
pub fn load_assets(path: &Path) -> Result<(Vec<AssetRef>, Vec<LoadWarning>)> {
    load_records(path)
}

/// Load lineage edges from `path`. See [`load_records`].
///
/// # Errors
///
/// See [`load_records`].
pub fn load_edges(path: &Path) -> Result<(Vec<LineageEdge>, Vec<LoadWarning>)> {
    load_records(path)
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson"))
}

fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<(Vec<T>, Vec<LoadWarning>)> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => warnings.push(LoadWarning::MalformedJson {
                line_number: index + 1,
                error: e.to_string(),
            }),
        }
    }

    Ok((records, warnings))
}
