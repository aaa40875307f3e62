//! File I/O for alignments.
//!
//! FASTA is the only on-disk format; this module adds the path-level
//! plumbing around it: extension checks and directory scans.

pub mod fasta;

pub use fasta::{write_alignment, FastaError, FastaReader};

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::alignment::Alignment;

/// Whether a path looks like a FASTA file (`.fa`/`.fasta`, optionally
/// gzipped).
pub fn is_fasta_path<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy().to_lowercase();
    let stem = path_str.strip_suffix(".gz").unwrap_or(&path_str);
    stem.ends_with(".fa") || stem.ends_with(".fasta")
}

/// Read every FASTA file in a directory, skipping other files.
///
/// Entries are sorted by filename so repeated runs see the same order
/// regardless of how the OS lists the directory.
pub fn read_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<(PathBuf, Alignment)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(anyhow!("not a directory: {}", dir.display()));
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_fasta_path(path))
        .collect();
    paths.sort();

    let mut alignments = Vec::with_capacity(paths.len());
    for path in paths {
        log::debug!("Reading {}", path.display());
        let alignment = FastaReader::read_file(&path)?;
        alignments.push((path, alignment));
    }

    Ok(alignments)
}
