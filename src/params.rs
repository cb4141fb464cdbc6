use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;

/// Sizes and hash function shared by key generation, signing, verification
/// and encoding. Two components only interoperate when built from equal
/// [`Params`].
///
/// The digest of a message has to supply exactly one bit per key position, and
/// public key entries are digests stored in element sized slots, so both
/// `key_size == 8 * digest_len` and `element_size == digest_len` are checked
/// when a configuration is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    key_size: usize,
    element_size: usize,
    hash: HashAlgorithm,
}

impl Params {
    /// Default number of key positions.
    pub const KEY_SIZE: usize = 256;
    /// Default length of a secret value in bytes.
    pub const ELEMENT_SIZE: usize = 32;

    pub fn new(key_size: usize, element_size: usize, hash: HashAlgorithm) -> Result<Params> {
        let digest_len = hash.digest_len();
        if key_size == 0 {
            return Err(Error::configuration("key size must be positive"));
        }
        if digest_len * 8 != key_size {
            return Err(Error::configuration(format!(
                "{hash} digests carry {} bits but the key size is {key_size}",
                digest_len * 8
            )));
        }
        if element_size != digest_len {
            return Err(Error::configuration(format!(
                "element size {element_size} differs from the {digest_len} byte {hash} digest"
            )));
        }
        Ok(Params {
            key_size,
            element_size,
            hash,
        })
    }

    /// 256 positions of 32 bytes, hashed with SHA-256.
    pub fn sha256() -> Params {
        Params {
            key_size: 256,
            element_size: 32,
            hash: HashAlgorithm::Sha256,
        }
    }

    /// 512 positions of 64 bytes, hashed with SHA-512.
    pub fn sha512() -> Params {
        Params {
            key_size: 512,
            element_size: 64,
            hash: HashAlgorithm::Sha512,
        }
    }

    /// Picks the matching sizes for `hash`.
    pub fn for_hash(hash: HashAlgorithm) -> Params {
        let digest_len = hash.digest_len();
        Params {
            key_size: digest_len * 8,
            element_size: digest_len,
            hash,
        }
    }

    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Length of an encoded signature.
    pub fn signature_len(&self) -> usize {
        self.key_size * self.element_size
    }

    /// Length of an encoded private or public key.
    pub fn key_len(&self) -> usize {
        2 * self.signature_len()
    }
}

impl Default for Params {
    /// 256 positions of 32 bytes, hashed with BLAKE3.
    fn default() -> Self {
        Params {
            key_size: Self::KEY_SIZE,
            element_size: Self::ELEMENT_SIZE,
            hash: HashAlgorithm::Blake3,
        }
    }
}
