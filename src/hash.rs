//! Thin adapter over the hash functions, the randomness source and hex text.
use std::fmt;
use std::str::FromStr;

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// The hash function a [`crate::Params`] signs and verifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// BLAKE3 with its default 32 byte output.
    #[default]
    Blake3,
    /// SHA-256, 32 byte output.
    Sha256,
    /// SHA-512, 64 byte output.
    Sha512,
}

impl HashAlgorithm {
    /// Length in bytes of every digest this algorithm produces.
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Blake3 => blake3::OUT_LEN,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Hashes `bytes`.
    pub fn digest<A: AsRef<[u8]>>(self, bytes: A) -> Vec<u8> {
        let bytes = bytes.as_ref();
        match self {
            HashAlgorithm::Blake3 => blake3::hash(bytes).as_bytes().to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(bytes).to_vec(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::UnknownHash(s.to_owned())),
        }
    }
}

/// Draws `n` bytes from `rng`, surfacing generator failures instead of
/// panicking.
pub fn random_bytes<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; n];
    rng.try_fill_bytes(&mut out)?;
    Ok(out)
}

/// Lowercase hex rendering of `bytes`.
pub fn to_hex<A: AsRef<[u8]>>(bytes: A) -> String {
    hex::encode(bytes)
}

/// Parses hex text produced by [`to_hex`].
pub fn from_hex<A: AsRef<[u8]>>(text: A) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
