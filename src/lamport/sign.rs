use crate::bits::bit_of_byteslice;
use crate::error::{Error, Result};
use crate::params::Params;

use super::keys::{KeyHalves, PrivateKey};

/// The result of [`Signer::sign`]ing a message. Can be verified
/// to be from the [`PrivateKey`] associated with a [`super::PublicKey`]
/// if you have that public key, the message, along with the signature.
///
/// Element `i` is the private entry chosen by bit `i` of the message digest.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Signature {
    exposed: Vec<Vec<u8>>,
}

impl Signature {
    pub fn elements(&self) -> &[Vec<u8>] {
        &self.exposed
    }

    pub fn len(&self) -> usize {
        self.exposed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exposed.is_empty()
    }
}

impl From<Vec<Vec<u8>>> for Signature {
    fn from(exposed: Vec<Vec<u8>>) -> Self {
        Signature { exposed }
    }
}

impl From<Signature> for Vec<Vec<u8>> {
    fn from(signature: Signature) -> Self {
        signature.exposed
    }
}

/// Signs messages under one [`Params`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Signer {
    params: Params,
}

impl Signer {
    pub fn new(params: Params) -> Self {
        Signer { params }
    }

    /// Signs the message, producing a [`Signature`] which another party would
    /// be able to [`crate::Verifier::verify`] with access to the public key
    /// of `private_key`.
    ///
    /// The key is consumed: revealing secrets for a second message would let
    /// anyone forge signatures, so a key cannot be reached again after this
    /// call and its secrets are wiped on return.
    pub fn sign<A: AsRef<[u8]>>(&self, private_key: PrivateKey, message: A) -> Result<Signature> {
        let digest = self.params.hash().digest(message.as_ref());
        let key_size = self.params.key_size();
        let mut exposed = Vec::with_capacity(key_size);
        for i in 0..key_size {
            let side = private_key.half(bit_of_byteslice(i, &digest));
            let secret = side.get(i).ok_or(Error::OutOfRange {
                index: i,
                len: side.len(),
                what: "private key half",
            })?;
            exposed.push(secret.clone());
        }
        tracing::debug!(key_size, hash = %self.params.hash(), "signed message, private key spent");
        Ok(Signature { exposed })
    }
}
