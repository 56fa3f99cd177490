//! Build a large sorted SM3 Merkle tree and prove inclusion and absence.
//!
//! Run with `RUST_LOG=debug` to see tree construction events.

use sm3kit_primitives::{MerkleTree, digest, error::Result};
use tracing_subscriber::EnvFilter;

const LEAF_COUNT: usize = 100_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for input in ["123456789", "abc", ""] {
        println!("SM3({input:?}) = {}", digest(input.as_bytes()));
    }

    // Sorted leaves, so the absence proof below is meaningful
    let mut leaves: Vec<Vec<u8>> = (0..LEAF_COUNT)
        .map(|i| format!("leaf-data-{i}").into_bytes())
        .collect();
    leaves.sort();

    println!("\nBuilding a Merkle tree over {LEAF_COUNT} leaves...");
    let tree = MerkleTree::new(leaves)?;
    let root = tree.root();
    println!("Root: {root}");

    println!("\nInclusion proof:");
    let target = b"leaf-data-88888";
    match tree.position(target) {
        Some(index) => {
            let proof = tree.generate_proof(index)?;
            println!(
                "  leaf {:?} at index {index}, proof of {} hashes",
                String::from_utf8_lossy(target),
                proof.len()
            );
            println!("  verified: {}", proof.verify(target, index, root));
        }
        None => println!("  leaf not found"),
    }

    println!("\nAbsence proof:");
    let missing = b"this-leaf-does-not-exist";
    let absence = tree.prove_absence(missing)?;
    println!(
        "  via predecessor {:?} at index {}",
        String::from_utf8_lossy(&absence.neighbor),
        absence.neighbor_index
    );
    println!("  verified: {}", absence.verify(root));

    Ok(())
}
