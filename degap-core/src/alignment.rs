//! In-memory model of a multiple-sequence alignment.
//!
//! An [`Alignment`] holds one row per sequence identifier, all of identical
//! length, and preserves the order in which rows were inserted. Row order is
//! what ends up on disk again after filtering, so it is kept explicitly as a
//! vector of records with a side map for id lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Gap symbol used when none is configured.
pub const DEFAULT_GAP: u8 = b'-';

/// Line width used for FASTA bodies when none is configured.
pub const DEFAULT_LINE_WIDTH: usize = 60;

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("alignment contains no sequences")]
    Empty,
    #[error("sequence '{id}' has length {found}, expected {expected}")]
    LengthMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate sequence identifier '{0}'")]
    DuplicateId(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A single row of an alignment: an identifier and its aligned sequence.
///
/// Sequences are ASCII bytes as read from FASTA, gaps included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

impl AlignedRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// A validated multiple-sequence alignment.
///
/// Invariant: at least one record, every sequence exactly `sequence_length`
/// bytes, identifiers unique. `records` is the canonical row order;
/// `record_map` maps an identifier to its index in `records`.
///
/// Serde goes through the row list so deserialization re-runs the
/// constructor validation instead of filling in the private fields raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AlignedRecord>", into = "Vec<AlignedRecord>")]
pub struct Alignment {
    records: Vec<AlignedRecord>,
    record_map: HashMap<String, usize>,
    sequence_length: usize,
}

impl TryFrom<Vec<AlignedRecord>> for Alignment {
    type Error = AlignmentError;

    fn try_from(records: Vec<AlignedRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<Alignment> for Vec<AlignedRecord> {
    fn from(alignment: Alignment) -> Self {
        alignment.records
    }
}

impl Alignment {
    /// Build an alignment from rows, validating the equal-length invariant.
    pub fn new(records: Vec<AlignedRecord>) -> Result<Self, AlignmentError> {
        let first = records.first().ok_or(AlignmentError::Empty)?;
        let sequence_length = first.sequence.len();

        let mut record_map = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.sequence.len() != sequence_length {
                return Err(AlignmentError::LengthMismatch {
                    id: record.id.clone(),
                    expected: sequence_length,
                    found: record.sequence.len(),
                });
            }
            if record_map.insert(record.id.clone(), index).is_some() {
                return Err(AlignmentError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records,
            record_map,
            sequence_length,
        })
    }

    /// Build from rows already known to satisfy the invariant.
    ///
    /// Caller must guarantee: non-empty, equal lengths, unique ids.
    pub(crate) fn from_validated(records: Vec<AlignedRecord>, sequence_length: usize) -> Self {
        let record_map = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.id.clone(), index))
            .collect();

        Self {
            records,
            record_map,
            sequence_length,
        }
    }

    /// Shared length of every sequence in the alignment.
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Number of rows.
    pub fn sequence_count(&self) -> usize {
        self.records.len()
    }

    /// Rows in insertion order.
    pub fn records(&self) -> &[AlignedRecord] {
        &self.records
    }

    /// Look up a sequence by identifier.
    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.record_map
            .get(id)
            .map(|&index| self.records[index].sequence.as_slice())
    }

    /// Identifiers in row order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    /// Serialize view: each row as its header plus the sequence split into
    /// `width`-byte chunks. The last chunk may be shorter; a zero-length
    /// sequence yields no chunks.
    pub fn wrapped(&self, width: usize) -> Result<Vec<(&str, Vec<&[u8]>)>, AlignmentError> {
        if width == 0 {
            return Err(AlignmentError::InvalidConfiguration(
                "line width must be positive".to_string(),
            ));
        }

        Ok(self
            .records
            .iter()
            .map(|record| {
                let chunks: Vec<&[u8]> = record.sequence.chunks(width).collect();
                (record.id.as_str(), chunks)
            })
            .collect())
    }
}
