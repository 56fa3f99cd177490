#![allow(missing_docs)]
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{RngCore, rng};

use sm3kit_forge::{LengthExtension, forge_extension};
use sm3kit_primitives::digest;

fn bench_forge(c: &mut Criterion) {
    let mut group = c.benchmark_group("forge_extension");

    let original = b"secret_keyplaintext";
    let published = digest(original);

    for size in [8, 256, 4096].iter() {
        let mut extension = vec![0u8; *size];
        rng().fill_bytes(&mut extension);

        group.bench_with_input(BenchmarkId::from_parameter(size), &extension, |b, ext| {
            b.iter(|| black_box(forge_extension(&published, original.len() as u64, ext).unwrap()));
        });
    }

    group.bench_function("extend_with_suffix", |b| {
        let extension = LengthExtension::new(published, original.len() as u64);
        b.iter(|| black_box(extension.extend(b"faketext").unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_forge);
criterion_main!(benches);
