//! Forge an SM3 digest for an extended message without knowing its secret prefix.

use sm3kit_forge::{LengthExtension, Result};
use sm3kit_primitives::digest;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let secret_key = b"secret_key";
    let original_data = b"plaintext";
    let extension_data = b"faketext";

    // What the victim computes and publishes
    let mut original = secret_key.to_vec();
    original.extend_from_slice(original_data);
    let original_hash = digest(&original);

    // What the attacker computes from the digest and the length alone
    let forgery = LengthExtension::new(original_hash, original.len() as u64).extend(extension_data)?;

    // What the victim computes for the spliced message
    let legitimate_hash = digest(&forgery.append_to(&original));

    println!("Original hash:   {original_hash}");
    println!("Forged hash:     {}", forgery.digest);
    println!("Legitimate hash: {legitimate_hash}");

    if forgery.digest == legitimate_hash {
        println!("\nAttack successful, forged hash matches legitimate hash");
    } else {
        println!("\nAttack failed");
    }

    Ok(())
}
