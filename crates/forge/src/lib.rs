//! Length-extension forgery against SM3.
//!
//! SM3 is a Merkle–Damgård construction and its digest is the full final
//! chaining state. Given only `SM3(secret || known)` and `len(secret || known)`,
//! this crate computes `SM3(secret || known || glue || extension)` for any
//! `extension`, without knowing `secret`. It uses the very same
//! [`State`](sm3kit_primitives::sm3::State), compression and padding as
//! [`sm3kit_primitives::digest`], so the forged digest matches a legitimate
//! one bit for bit.
//!
//! # Example
//!
//! ```
//! use sm3kit_forge::{LengthExtension, forge_extension};
//! use sm3kit_primitives::digest;
//!
//! // The victim publishes a digest of secret || known
//! let published = digest(b"secret_keyplaintext");
//!
//! // The attacker only knows the digest and the length (19 bytes)
//! let forgery = LengthExtension::new(published, 19).extend(b"faketext").unwrap();
//! assert_eq!(forgery.digest, forge_extension(&published, 19, b"faketext").unwrap());
//!
//! // The victim's own hash of the spliced message agrees
//! assert_eq!(digest(&forgery.append_to(b"secret_keyplaintext")), forgery.digest);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
mod extension;

pub use error::{ForgeError, Result};
pub use extension::{Forgery, LengthExtension, forge_extension, glue_padding};
