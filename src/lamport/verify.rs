use subtle::{Choice, ConstantTimeEq};

use crate::bits::bit_of_byteslice;
use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::params::Params;

use super::keys::{KeyHalves, PublicKey};
use super::sign::Signature;

/// Checks signatures under one [`Params`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    params: Params,
}

impl Verifier {
    pub fn new(params: Params) -> Self {
        Verifier { params }
    }

    /// Returns `Ok(true)` iff every signature element hashes to the public
    /// entry selected by the matching digest bit.
    ///
    /// All positions are hashed and compared in constant time, whatever the
    /// outcome of earlier positions. A signature or key half with fewer
    /// entries than the key size is an [`Error::OutOfRange`], not a mismatch.
    pub fn verify<A: AsRef<[u8]>>(
        &self,
        signature: &Signature,
        public_key: &PublicKey,
        message: A,
    ) -> Result<bool> {
        let hash = self.params.hash();
        let digest = hash.digest(message.as_ref());
        let elements = signature.elements();
        let mut valid = Choice::from(1u8);
        for i in 0..self.params.key_size() {
            let element = elements.get(i).ok_or(Error::OutOfRange {
                index: i,
                len: elements.len(),
                what: "signature",
            })?;
            let side = public_key.half(bit_of_byteslice(i, &digest));
            let expected = side.get(i).ok_or(Error::OutOfRange {
                index: i,
                len: side.len(),
                what: "public key half",
            })?;
            valid &= hash.digest(element).as_slice().ct_eq(expected.as_slice());
        }
        let valid = bool::from(valid);
        tracing::debug!(valid, hash = %hash, "verified lamport signature");
        Ok(valid)
    }

    /// Decodes both buffers strictly, then [`Verifier::verify`]s.
    pub fn verify_encoded<A: AsRef<[u8]>>(
        &self,
        encoded_signature: &[u8],
        encoded_public_key: &[u8],
        message: A,
    ) -> Result<bool> {
        let codec = Codec::new(self.params);
        let signature = codec.decode_signature(encoded_signature)?;
        let public_key: PublicKey = codec.decode_key(encoded_public_key)?;
        self.verify(&signature, &public_key, message)
    }
}
