#![allow(missing_docs)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{RngCore, rng};

use sm3kit_primitives::sm3::{BLOCK_SIZE, State, compress, expand};
use sm3kit_primitives::{Sm3, digest};

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm3_digest");

    for size in [0, 64, 1000, 4096, 4096 * 16].iter() {
        let mut data = vec![0u8; *size];
        rng().fill_bytes(&mut data);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| digest(data));
        });
    }

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm3_block");

    let mut block = [0u8; BLOCK_SIZE];
    rng().fill_bytes(&mut block);

    group.bench_function("expand", |b| b.iter(|| expand(&block)));
    group.bench_function("compress", |b| {
        b.iter(|| {
            let mut state = State::INITIAL;
            compress(&mut state, &block);
            state
        });
    });

    group.finish();
}

fn bench_hasher_updates(c: &mut Criterion) {
    let mut data = vec![0u8; 4096];
    rng().fill_bytes(&mut data);

    c.bench_function("sm3_hasher_multiple_small", |b| {
        b.iter(|| {
            let mut hasher = Sm3::new();
            for chunk in data.chunks(128) {
                hasher.update(chunk);
            }
            hasher.sum()
        });
    });
}

criterion_group!(benches, bench_digest, bench_block, bench_hasher_updates);
criterion_main!(benches);
