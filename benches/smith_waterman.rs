//! Smith-Waterman alignment benchmarks
//!
//! Measures the alignment kernel and the batch quantification pipeline:
//! - Sequence lengths: 100bp, 500bp, 1000bp
//! - Unweighted vs quality-weighted scoring
//! - Full traceback vs rolling-row score-only
//! - Batch quantification across reference set sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use readquant::{
    align, align_score, align_weighted, quantify, QualityTrack, QuantifyConfig, ReadRecord,
    ReferenceRecord, Sequence, SubstitutionMatrix, DEFAULT_GAP_PENALTY,
};

/// Generate a random DNA sequence of given length
fn generate_sequence(len: usize) -> Sequence {
    let bases = b"ACGT";
    let mut rng = rand::thread_rng();
    let raw: Vec<u8> = (0..len).map(|_| bases[rng.gen_range(0..4)]).collect();
    Sequence::from_bytes(&raw).unwrap()
}

/// Generate a random Phred+33 quality string of given length
fn generate_quality(len: usize) -> QualityTrack {
    let mut rng = rand::thread_rng();
    let raw: String = (0..len)
        .map(|_| (33 + rng.gen_range(0..41) as u8) as char)
        .collect();
    QualityTrack::from_phred33(&raw).unwrap()
}

/// Benchmark unweighted alignment - single pair
fn bench_align_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_single");
    group.sample_size(30);

    for seq_len in [100, 500, 1000].iter() {
        let query = generate_sequence(*seq_len);
        let reference = generate_sequence(*seq_len);
        let matrix = SubstitutionMatrix::default();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}bp", seq_len)),
            seq_len,
            |b, _| {
                b.iter(|| {
                    black_box(align(
                        black_box(&query),
                        black_box(&reference),
                        black_box(&matrix),
                        DEFAULT_GAP_PENALTY,
                    ))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark quality-weighted alignment - single pair
fn bench_align_weighted_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_weighted_single");
    group.sample_size(30);

    for seq_len in [100, 500, 1000].iter() {
        let query = generate_sequence(*seq_len);
        let quality = generate_quality(*seq_len);
        let reference = generate_sequence(*seq_len);
        let matrix = SubstitutionMatrix::default();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}bp", seq_len)),
            seq_len,
            |b, _| {
                b.iter(|| {
                    black_box(align_weighted(
                        black_box(&query),
                        black_box(&quality),
                        black_box(&reference),
                        black_box(&matrix),
                        DEFAULT_GAP_PENALTY,
                    ))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark rolling-row score-only variant against the full fill
fn bench_score_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_score_only");
    group.sample_size(30);

    let seq_len = 500;
    let query = generate_sequence(seq_len);
    let reference = generate_sequence(seq_len);
    let matrix = SubstitutionMatrix::default();

    group.throughput(Throughput::Elements(1));
    group.bench_function("full_traceback_500bp", |b| {
        b.iter(|| {
            black_box(align(
                black_box(&query),
                black_box(&reference),
                black_box(&matrix),
                DEFAULT_GAP_PENALTY,
            ))
        })
    });
    group.bench_function("rolling_rows_500bp", |b| {
        b.iter(|| {
            black_box(align_score(
                black_box(&query),
                black_box(&reference),
                black_box(&matrix),
                DEFAULT_GAP_PENALTY,
            ))
        })
    });

    group.finish();
}

/// Benchmark batch quantification - parallel reduction over references
fn bench_quantify_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantify_batch");
    group.sample_size(30);

    let read_len = 100;
    let ref_len = 500;
    let config = QuantifyConfig::default();

    for n_refs in [10, 50, 100].iter() {
        let reads: Vec<ReadRecord> = (0..8)
            .map(|i| {
                ReadRecord::with_quality(
                    format!("read{}", i),
                    generate_sequence(read_len),
                    generate_quality(read_len),
                )
            })
            .collect();
        let references: Vec<ReferenceRecord> = (0..*n_refs)
            .map(|i| ReferenceRecord::new(format!("tx{}", i), generate_sequence(ref_len)))
            .collect();

        group.throughput(Throughput::Elements((reads.len() * n_refs) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("8x{}refs", n_refs)),
            n_refs,
            |b, _| {
                b.iter(|| {
                    black_box(quantify(
                        black_box(&reads),
                        black_box(&references),
                        black_box(&config),
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_align_single,
    bench_align_weighted_single,
    bench_score_only,
    bench_quantify_batch
);

criterion_main!(benches);
