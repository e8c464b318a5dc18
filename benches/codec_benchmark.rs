use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rlp_rust::{decode, encode, Decoder, Input};

fn create_flat_list(len: usize) -> Input {
    Input::List(
        (0..len)
            .map(|i| Input::Bytes(vec![(i % 251) as u8; 32]))
            .collect(),
    )
}

fn create_nested_list(depth: usize) -> Input {
    (0..depth).fold(Input::from("leaf"), |inner, _| Input::List(vec![inner, Input::from(7u8)]))
}

/// Benchmark encoding of flat lists of 32-byte strings
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in &[16, 256, 4096] {
        let input = create_flat_list(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| encode(black_box(input)))
        });
    }

    group.finish();
}

/// Benchmark decoding of the same payloads
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in &[16, 256, 4096] {
        let encoded = encode(&create_flat_list(*size)).expect("encodable input");

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)))
        });
    }

    group.finish();
}

/// Benchmark decoding of deeply nested lists
fn bench_decode_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_nested");
    let decoder = Decoder::new();

    for depth in &[8, 64, 512] {
        let encoded = encode(&create_nested_list(*depth)).expect("encodable input");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &encoded, |b, encoded| {
            b.iter(|| decoder.decode(black_box(encoded)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_decode_nested);
criterion_main!(benches);
