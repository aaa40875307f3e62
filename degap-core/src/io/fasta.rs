//! FASTA reading and writing for alignments.
//!
//! Parsing is delegated to needletail, with gzip support via flate2. Records
//! are collected into an [`Alignment`], so a file with rows of unequal
//! length fails here with the construction error rather than producing a
//! partially valid alignment.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use flate2::read::GzDecoder;
use needletail::{parse_fastx_file, parse_fastx_reader};
use thiserror::Error;

use crate::alignment::{AlignedRecord, Alignment, AlignmentError};

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty file or no sequences found")]
    EmptyFile,
    #[error("Invalid alignment: {0}")]
    Alignment(#[from] AlignmentError),
}

/// Reader producing an [`Alignment`] from FASTA data.
pub struct FastaReader;

impl FastaReader {
    /// Read an alignment from a FASTA file, gzipped or plain.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Alignment> {
        let path_str = path.as_ref().to_string_lossy();

        if path_str.ends_with(".gz") {
            let file = File::open(&path)?;
            Self::read_reader(GzDecoder::new(file))
        } else {
            let mut records = Vec::new();
            let mut reader =
                parse_fastx_file(&path).map_err(|e| FastaError::Parse(e.to_string()))?;

            while let Some(record) = reader.next() {
                let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
                records.push(AlignedRecord::new(
                    sanitize_header(record.id()),
                    record.seq().to_vec(),
                ));
            }

            Self::build(records)
        }
    }

    /// Read an alignment from any readable FASTA source.
    pub fn read_reader<R: std::io::Read + std::marker::Send>(reader: R) -> Result<Alignment> {
        let mut records = Vec::new();
        let mut fastx_reader =
            parse_fastx_reader(reader).map_err(|e| FastaError::Parse(e.to_string()))?;

        while let Some(record) = fastx_reader.next() {
            let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
            records.push(AlignedRecord::new(
                sanitize_header(record.id()),
                record.seq().to_vec(),
            ));
        }

        Self::build(records)
    }

    fn build(records: Vec<AlignedRecord>) -> Result<Alignment> {
        if records.is_empty() {
            return Err(FastaError::EmptyFile.into());
        }
        Ok(Alignment::new(records).map_err(FastaError::Alignment)?)
    }
}

/// Replace whitespace in a header with underscores.
///
/// Downstream tools that truncate ids at the first space would otherwise
/// collapse distinct headers onto the same key, so the whole header line
/// becomes the identifier.
fn sanitize_header(header: &[u8]) -> String {
    String::from_utf8_lossy(header)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Write an alignment as FASTA with bodies wrapped at `width` characters.
pub fn write_alignment<P: AsRef<Path>>(path: P, alignment: &Alignment, width: usize) -> Result<()> {
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    for (header, chunks) in alignment.wrapped(width)? {
        writeln!(writer, ">{}", header)?;
        for chunk in chunks {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}
