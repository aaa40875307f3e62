use degap_core::*;
use proptest::prelude::*;

fn base() -> impl Strategy<Value = u8> {
    prop_oneof![
        Just(b'A'),
        Just(b'C'),
        Just(b'G'),
        Just(b'T'),
        Just(DEFAULT_GAP),
    ]
}

fn arb_alignment() -> impl Strategy<Value = Alignment> {
    (1usize..8, 0usize..48)
        .prop_flat_map(|(rows, len)| {
            proptest::collection::vec(proptest::collection::vec(base(), len), rows)
        })
        .prop_map(|rows| {
            let records = rows
                .into_iter()
                .enumerate()
                .map(|(i, sequence)| AlignedRecord::new(format!("seq{}", i), sequence))
                .collect();
            Alignment::new(records).unwrap()
        })
}

proptest! {
    #[test]
    fn filter_output_has_no_gaps(alignment in arb_alignment()) {
        let filtered = remove_gap_columns(&alignment, DEFAULT_GAP);
        prop_assert!(gap_columns(&filtered, DEFAULT_GAP).iter().all(|&dirty| !dirty));
    }

    #[test]
    fn filter_is_idempotent(alignment in arb_alignment()) {
        let once = remove_gap_columns(&alignment, DEFAULT_GAP);
        let twice = remove_gap_columns(&once, DEFAULT_GAP);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_exactly_the_clean_columns(alignment in arb_alignment()) {
        let gapped = gap_columns(&alignment, DEFAULT_GAP);
        let clean = gapped.iter().filter(|&&dirty| !dirty).count();
        let filtered = remove_gap_columns(&alignment, DEFAULT_GAP);

        prop_assert_eq!(filtered.sequence_length(), clean);
        prop_assert_eq!(filtered.sequence_count(), alignment.sequence_count());

        // Each row's output is its input restricted to clean columns, in order.
        for (input, output) in alignment.records().iter().zip(filtered.records()) {
            prop_assert_eq!(&input.id, &output.id);
            let expected: Vec<u8> = input
                .sequence
                .iter()
                .zip(&gapped)
                .filter(|(_, &dirty)| !dirty)
                .map(|(&b, _)| b)
                .collect();
            prop_assert_eq!(&output.sequence, &expected);
        }
    }

    #[test]
    fn wrapped_chunks_rebuild_sequences(alignment in arb_alignment(), width in 1usize..80) {
        let wrapped = alignment.wrapped(width).unwrap();
        for ((header, chunks), record) in wrapped.iter().zip(alignment.records()) {
            prop_assert_eq!(*header, record.id.as_str());
            prop_assert_eq!(chunks.concat(), record.sequence.clone());
            if !chunks.is_empty() {
                for chunk in &chunks[..chunks.len() - 1] {
                    prop_assert_eq!(chunk.len(), width);
                }
                let last = chunks.last().unwrap();
                prop_assert!(!last.is_empty() && last.len() <= width);
            }
        }
    }
}
