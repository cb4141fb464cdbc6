use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::hash::random_bytes;
use crate::params::Params;

/// One of the two parallel sequences of a key, indexed by key position.
pub type KeyHalf = Vec<Vec<u8>>;

pub(crate) mod sealed {
    use super::KeyHalf;

    /// Building a key from raw halves stays inside the crate, so the only way
    /// to get a second [`super::PrivateKey`] with the same secrets is to decode
    /// an encoding the caller chose to keep.
    pub trait FromHalves {
        fn from_halves(halves: [KeyHalf; 2]) -> Self;
    }
}

use sealed::FromHalves;

/// Read access shared by [`PrivateKey`] and [`PublicKey`]. Both are two
/// halves of equal length, half 0 answering digest bits that are `0` and
/// half 1 bits that are `1`, which is all [`crate::Codec`] needs to know.
///
/// The trait is sealed: keys come from [`KeyGenerator`] or from decoding.
pub trait KeyHalves: FromHalves + Sized {
    fn halves(&self) -> &[KeyHalf; 2];

    /// Entries selected by a digest bit of value `bit`.
    fn half(&self, bit: bool) -> &KeyHalf {
        &self.halves()[bit as usize]
    }
}

/// A private key is what you generate and keep in order to sign one message.
/// From it, you can derive a [`PublicKey`] and send that to others,
/// allowing them to verify your signature down the line.
///
/// A private key is spent by [`crate::Signer::sign`], which takes it by value;
/// the secrets are wiped from memory when the key is dropped.
///
/// Two private keys compare with [`ConstantTimeEq`] only.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    halves: [KeyHalf; 2],
}

impl PrivateKey {
    /// Re-derives the [`PublicKey`] under `params`.
    pub fn public_key(&self, params: &Params) -> PublicKey {
        KeyGenerator::new(*params).public_key(self)
    }
}

impl FromHalves for PrivateKey {
    fn from_halves(halves: [KeyHalf; 2]) -> Self {
        PrivateKey { halves }
    }
}

impl KeyHalves for PrivateKey {
    fn halves(&self) -> &[KeyHalf; 2] {
        &self.halves
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut equal = Choice::from(1u8);
        for (ours, theirs) in self.halves.iter().zip(&other.halves) {
            equal &= Choice::from((ours.len() == theirs.len()) as u8);
            for (a, b) in ours.iter().zip(theirs) {
                equal &= a.as_slice().ct_eq(b.as_slice());
            }
        }
        equal
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key_size", &self.halves[0].len())
            .finish_non_exhaustive()
    }
}

/// The public key associated with a given [`PrivateKey`], allowing any
/// owner to [`crate::Verifier::verify`] a [`crate::Signature`] produced by
/// that [`PrivateKey`]. Entry `[b][i]` is the hash of private entry `[b][i]`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct PublicKey {
    halves: [KeyHalf; 2],
}

impl FromHalves for PublicKey {
    fn from_halves(halves: [KeyHalf; 2]) -> Self {
        PublicKey { halves }
    }
}

impl KeyHalves for PublicKey {
    fn halves(&self) -> &[KeyHalf; 2] {
        &self.halves
    }
}

/// Produces key pairs for one [`Params`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGenerator {
    params: Params,
}

impl KeyGenerator {
    pub fn new(params: Params) -> Self {
        KeyGenerator { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Generates a new key pair using the operating system random number
    /// generator.
    pub fn generate(&self) -> Result<(PrivateKey, PublicKey)> {
        self.generate_with_rng(&mut OsRng)
    }

    /// Generates a new key pair from `rng`, one independent draw per half.
    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(PrivateKey, PublicKey)> {
        let zeros = self.generate_private_key_half(rng)?;
        let ones = self.generate_private_key_half(rng)?;
        let private_key = PrivateKey::from_halves([zeros, ones]);
        let public_key = self.public_key(&private_key);
        tracing::debug!(
            key_size = self.params.key_size(),
            hash = %self.params.hash(),
            "generated lamport key pair"
        );
        Ok((private_key, public_key))
    }

    /// Draws `key_size` secrets of `element_size` bytes each.
    pub fn generate_private_key_half<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<KeyHalf> {
        (0..self.params.key_size())
            .map(|_| random_bytes(rng, self.params.element_size()))
            .collect()
    }

    /// Hashes every secret of a half, keeping order and length.
    pub fn derive_public_key_half(&self, half: &[Vec<u8>]) -> KeyHalf {
        let hash = self.params.hash();
        half.iter().map(|secret| hash.digest(secret)).collect()
    }

    /// Creates the [`PublicKey`] associated with `private_key`.
    pub fn public_key(&self, private_key: &PrivateKey) -> PublicKey {
        let [zeros, ones] = private_key.halves();
        PublicKey::from_halves([
            self.derive_public_key_half(zeros),
            self.derive_public_key_half(ones),
        ])
    }
}
