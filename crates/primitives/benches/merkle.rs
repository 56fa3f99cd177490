#![allow(missing_docs)]
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;
use std::time::Duration;

use sm3kit_primitives::MerkleTree;

fn leaves(count: usize) -> Vec<Vec<u8>> {
    let mut leaves: Vec<Vec<u8>> = (0..count)
        .map(|i| format!("leaf-data-{i}").into_bytes())
        .collect();
    leaves.sort();
    leaves
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_build");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for count in [16, 1024, 100_000].iter() {
        let data = leaves(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| MerkleTree::new(data.clone()).unwrap());
        });
    }

    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_proofs");

    let data = leaves(100_000);
    let tree = MerkleTree::new(data.clone()).unwrap();
    let root = tree.root();

    let indexes = [0, 88_888, 99_999];

    for &index in &indexes {
        group.bench_with_input(
            BenchmarkId::new("generate_proof", index),
            &index,
            |b, &idx| {
                b.iter(|| black_box(tree.generate_proof(idx).unwrap()));
            },
        );
    }

    for &index in &indexes {
        let proof = tree.generate_proof(index).unwrap();
        assert!(
            proof.verify(&data[index], index, root),
            "Verification failed for index {index}"
        );
        group.bench_with_input(BenchmarkId::new("verify_proof", index), &index, |b, _| {
            b.iter(|| black_box(MerkleTree::verify_proof(&data[index], index, &proof, root)));
        });
    }

    group.bench_function("full_proof_cycle", |b| {
        b.iter(|| {
            let index = rand::rng().random_range(0..data.len());
            let proof = tree.generate_proof(index).unwrap();
            black_box(proof.verify(&data[index], index, root))
        });
    });

    group.bench_function("prove_absence", |b| {
        b.iter(|| black_box(tree.prove_absence(b"this-leaf-does-not-exist").unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_proofs);
criterion_main!(benches);
