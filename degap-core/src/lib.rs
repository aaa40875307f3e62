//! degap Core Library
//!
//! Alignment model, gap-column filter, and FASTA I/O for degap.

pub mod alignment;
pub mod filter;
pub mod io;

// Re-export commonly used types and functions
pub use alignment::{AlignedRecord, Alignment, AlignmentError, DEFAULT_GAP, DEFAULT_LINE_WIDTH};
pub use filter::{gap_columns, remove_gap_columns};
pub use io::{read_directory, write_alignment, FastaError, FastaReader};

/// Version information for the degap core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
