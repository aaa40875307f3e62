//! Gap-column removal.
//!
//! A column is gapped when at least one row carries the gap symbol at that
//! position. Filtering drops every gapped column and keeps the rest in
//! order, so all rows shrink by the same amount and the equal-length
//! invariant holds on the result.

use crate::alignment::{AlignedRecord, Alignment};

/// Mark gapped columns: entry `c` is true iff some row has `gap` at
/// position `c`. One pass over the whole character grid.
pub fn gap_columns(alignment: &Alignment, gap: u8) -> Vec<bool> {
    let mut gapped = vec![false; alignment.sequence_length()];

    for record in alignment.records() {
        for (column, &base) in record.sequence.iter().enumerate() {
            if base == gap {
                gapped[column] = true;
            }
        }
    }

    gapped
}

/// Build a new alignment containing only the columns where no row has the
/// gap symbol. Row order and identifiers are unchanged. If every column is
/// gapped the result has zero-length sequences; if none is, the result
/// equals the input.
pub fn remove_gap_columns(alignment: &Alignment, gap: u8) -> Alignment {
    let gapped = gap_columns(alignment, gap);
    let kept = gapped.iter().filter(|&&dirty| !dirty).count();

    if kept == alignment.sequence_length() {
        return alignment.clone();
    }

    let records = alignment
        .records()
        .iter()
        .map(|record| {
            let mut sequence = Vec::with_capacity(kept);
            for (column, &base) in record.sequence.iter().enumerate() {
                if !gapped[column] {
                    sequence.push(base);
                }
            }
            AlignedRecord::new(record.id.clone(), sequence)
        })
        .collect();

    // Every row kept the same column set, so the invariant is preserved.
    Alignment::from_validated(records, kept)
}
