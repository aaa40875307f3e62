use criterion::{black_box, criterion_group, criterion_main, Criterion};
use degap_core::{remove_gap_columns, AlignedRecord, Alignment, DEFAULT_GAP};

fn generate_test_alignment(rows: usize, length: usize) -> Alignment {
    // Gap every 13th column in odd rows so a fixed share of columns is dirty.
    let records = (0..rows)
        .map(|row| {
            let pattern = b"ACGTACGT";
            let mut sequence = Vec::with_capacity(length);
            for column in 0..length {
                if row % 2 == 1 && column % 13 == 0 {
                    sequence.push(DEFAULT_GAP);
                } else {
                    sequence.push(pattern[column % pattern.len()]);
                }
            }
            AlignedRecord::new(format!("seq{}", row), sequence)
        })
        .collect();

    Alignment::new(records).unwrap()
}

fn bench_remove_gap_columns(c: &mut Criterion) {
    let alignment = generate_test_alignment(50, 10_000);

    c.bench_function("remove_gap_columns_50x10kb", |b| {
        b.iter(|| black_box(remove_gap_columns(black_box(&alignment), DEFAULT_GAP)))
    });
}

fn bench_different_row_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_row_counts");

    for rows in [10, 100, 1000].iter() {
        let alignment = generate_test_alignment(*rows, 2_000);
        group.bench_with_input(format!("rows_{}", rows), rows, |b, _| {
            b.iter(|| black_box(remove_gap_columns(black_box(&alignment), DEFAULT_GAP)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_remove_gap_columns, bench_different_row_counts);
criterion_main!(benches);
