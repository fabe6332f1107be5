//! Edge-list import
//!
//! Reads `source|destination|weight` records, one per line, and builds a
//! [`GraphStore`] from them. Any malformed line fails the whole import, so a
//! store is only ever produced from a fully valid input.

use std::io::Read;
use std::path::Path;

use super::store::GraphStore;
use crate::errors::{Error, Result};
use crate::types::ImportConfig;

/// Field separator of the edge-list format
pub const FIELD_SEPARATOR: char = '|';

/// One parsed `source|destination|weight` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub weight: u64,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: u64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// Parse a single line. `line_no` is 1-based and only used for errors.
    pub fn parse(line: &str, line_no: usize, cfg: &ImportConfig) -> Result<Self> {
        let fields: Vec<&str> = line
            .split(FIELD_SEPARATOR)
            .map(|f| if cfg.trim_fields { f.trim() } else { f })
            .collect();

        if fields.len() != 3 {
            return Err(Error::format(
                line_no,
                format!("expected 3 `|`-separated fields, found {}", fields.len()),
            ));
        }

        let (source, destination, weight) = (fields[0], fields[1], fields[2]);
        if source.is_empty() || destination.is_empty() {
            return Err(Error::format(line_no, "empty vertex name"));
        }

        let weight = weight.parse::<u64>().map_err(|_| {
            Error::format(
                line_no,
                format!("weight `{weight}` is not a non-negative integer"),
            )
        })?;

        Ok(Self::new(source, destination, weight))
    }
}

/// Decode raw input as UTF-8. Invalid bytes are a format error on the line
/// that contains them.
fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = e.valid_up_to();
        let line = bytes[..valid].iter().filter(|&&b| b == b'\n').count() + 1;
        Error::format(line, "line is not valid UTF-8")
    })
}

/// Parse a whole edge list, failing on the first malformed line.
pub fn parse_edge_list(text: &str, cfg: &ImportConfig) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if cfg.skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        records.push(EdgeRecord::parse(line, idx + 1, cfg)?);
    }
    Ok(records)
}

impl GraphStore {
    /// Parse an in-memory edge list and build a store from it
    pub fn from_edge_list(text: &str, cfg: &ImportConfig) -> Result<Self> {
        trace_stage!(crate::STAGE_IMPORT);
        let records = parse_edge_list(text, cfg)?;
        let store = Self::from_records(&records);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            records = records.len(),
            vertices = store.vertex_count(),
            edges = store.edge_count(),
            "edge list imported"
        );

        Ok(store)
    }

    /// Read an edge list from any reader
    ///
    /// Read failures are [`Error::Io`]; input that is not UTF-8 is
    /// [`Error::Format`] on the offending line.
    pub fn from_reader<R: Read>(mut reader: R, cfg: &ImportConfig) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_edge_list(decode_utf8(&bytes)?, cfg)
    }

    /// Read an edge list from a file
    ///
    /// Errors are reported as in [`GraphStore::from_reader`].
    pub fn from_path(path: impl AsRef<Path>, cfg: &ImportConfig) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_edge_list(decode_utf8(&bytes)?, cfg)
    }
}
