//! Lamport one-time signatures built from nothing but a hash function.
//!
//! A private key is two rows of random secrets, one row per bit value. The
//! public key is the hash of every secret. Signing a message reveals, for each
//! bit of the message digest, the secret from the row that bit selects;
//! verifying hashes the revealed secrets and compares them against the public
//! key.
//!
//! Each private key may sign exactly one message. [`Signer::sign`] takes the
//! key by value, so a spent key cannot be reached again.
//!
//! ```
//! use lamport_ots::{Codec, KeyGenerator, Params, PublicKey, Signer, Verifier};
//!
//! # fn main() -> lamport_ots::Result<()> {
//! let params = Params::default();
//! let (private_key, public_key) = KeyGenerator::new(params).generate()?;
//! let signature = Signer::new(params).sign(private_key, "Hello cryptocurrency")?;
//!
//! let codec = Codec::new(params);
//! let signature = codec.decode_signature(&codec.encode_signature(&signature))?;
//! let public_key: PublicKey = codec.decode_key(&codec.encode_key(&public_key))?;
//!
//! let verifier = Verifier::new(params);
//! assert!(verifier.verify(&signature, &public_key, "Hello cryptocurrency")?);
//! assert!(!verifier.verify(&signature, &public_key, "Hello Cryptocurrency")?);
//! # Ok(())
//! # }
//! ```
//!
//! A key cannot be used after signing:
//!
//! ```compile_fail
//! use lamport_ots::{KeyGenerator, Params, Signer};
//!
//! let (private_key, _) = KeyGenerator::new(Params::default()).generate().unwrap();
//! let signer = Signer::new(Params::default());
//! let _ = signer.sign(private_key, "one");
//! let _ = signer.sign(private_key, "two");
//! ```
//!
//! nor copied out of its halves, since keys are only built by
//! [`KeyGenerator`] or decoded by [`Codec`]:
//!
//! ```compile_fail
//! use lamport_ots::{KeyGenerator, KeyHalves, Params, PrivateKey};
//!
//! let (private_key, _) = KeyGenerator::new(Params::default()).generate().unwrap();
//! let copy = PrivateKey::from_halves(private_key.halves().clone());
//! ```
pub mod bits;
pub mod codec;
pub mod error;
pub mod hash;
pub mod lamport;
pub mod params;

pub use codec::Codec;
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
pub use lamport::{
    KeyGenerator, KeyHalf, KeyHalves, PrivateKey, PublicKey, Signature, Signer, Verifier,
};
pub use params::Params;
