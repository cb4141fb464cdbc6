//! Flat byte layouts for keys and signatures.
//!
//! There are no length prefixes or delimiters: a signature is its `key_size`
//! elements concatenated in position order, and a key is every entry of half 0
//! followed by every entry of half 1, each entry `element_size` bytes. The
//! same layout serves private and public keys.
//!
//! The strict decoders refuse any buffer whose length is not exactly the
//! configured size. The `_lenient` decoders reproduce plain slicing instead:
//! bytes past the end are ignored and missing bytes yield short or empty
//! entries, which later fail verification rather than decoding.
use crate::error::{Error, Result};
use crate::hash::{from_hex, to_hex};
use crate::lamport::{FromHalves, KeyHalf, KeyHalves, Signature};
use crate::params::Params;

/// Encodes and decodes under one [`Params`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    params: Params,
}

impl Codec {
    pub fn new(params: Params) -> Self {
        Codec { params }
    }

    pub fn encode_signature(&self, signature: &Signature) -> Vec<u8> {
        signature.elements().concat()
    }

    pub fn decode_signature(&self, bytes: &[u8]) -> Result<Signature> {
        self.check_len(bytes, self.params.signature_len(), "signature")?;
        Ok(self.decode_signature_lenient(bytes))
    }

    pub fn decode_signature_lenient(&self, bytes: &[u8]) -> Signature {
        if bytes.len() != self.params.signature_len() {
            tracing::warn!(
                expected = self.params.signature_len(),
                actual = bytes.len(),
                "decoding signature of unexpected length"
            );
        }
        Signature::from(self.slice_entries(bytes, 0))
    }

    /// Half 0 then half 1, each in position order.
    pub fn encode_key<K: KeyHalves>(&self, key: &K) -> Vec<u8> {
        let [zeros, ones] = key.halves();
        let mut out = Vec::with_capacity(self.params.key_len());
        for entry in zeros.iter().chain(ones) {
            out.extend_from_slice(entry);
        }
        out
    }

    pub fn decode_key<K: KeyHalves>(&self, bytes: &[u8]) -> Result<K> {
        self.check_len(bytes, self.params.key_len(), "key")?;
        Ok(self.decode_key_lenient(bytes))
    }

    pub fn decode_key_lenient<K: KeyHalves>(&self, bytes: &[u8]) -> K {
        if bytes.len() != self.params.key_len() {
            tracing::warn!(
                expected = self.params.key_len(),
                actual = bytes.len(),
                "decoding key of unexpected length"
            );
        }
        let key_size = self.params.key_size();
        <K as FromHalves>::from_halves([
            self.slice_entries(bytes, 0),
            self.slice_entries(bytes, key_size),
        ])
    }

    pub fn signature_to_hex(&self, signature: &Signature) -> String {
        to_hex(self.encode_signature(signature))
    }

    pub fn signature_from_hex(&self, text: &str) -> Result<Signature> {
        self.decode_signature(&from_hex(text)?)
    }

    pub fn key_to_hex<K: KeyHalves>(&self, key: &K) -> String {
        to_hex(self.encode_key(key))
    }

    pub fn key_from_hex<K: KeyHalves>(&self, text: &str) -> Result<K> {
        self.decode_key(&from_hex(text)?)
    }

    /// `key_size` entries starting at entry `first`, clamped to the buffer.
    fn slice_entries(&self, bytes: &[u8], first: usize) -> KeyHalf {
        let element_size = self.params.element_size();
        (first..first + self.params.key_size())
            .map(|i| {
                let start = (i * element_size).min(bytes.len());
                let end = (start + element_size).min(bytes.len());
                bytes[start..end].to_vec()
            })
            .collect()
    }

    fn check_len(&self, bytes: &[u8], expected: usize, what: &'static str) -> Result<()> {
        if bytes.len() != expected {
            return Err(Error::Decode {
                what,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(())
    }
}
