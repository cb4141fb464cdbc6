mod keys;
mod sign;
mod verify;

pub(crate) use keys::sealed::FromHalves;
pub use keys::{KeyGenerator, KeyHalf, KeyHalves, PrivateKey, PublicKey};
pub use sign::{Signature, Signer};
pub use verify::Verifier;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::params::Params;
    use crate::hash::to_hex;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use subtle::ConstantTimeEq;

    fn seeded_pair(params: Params, seed: u64) -> (PrivateKey, PublicKey) {
        KeyGenerator::new(params)
            .generate_with_rng(&mut StdRng::seed_from_u64(seed))
            .unwrap()
    }

    #[test]
    fn end_to_end() -> Result<(), Box<dyn std::error::Error>> {
        let params = Params::default();
        let (private, public_key) = KeyGenerator::new(params).generate()?;
        let message = b"Hello, world!";

        let signature = Signer::new(params).sign(private, message)?;
        let verifier = Verifier::new(params);
        assert!(verifier.verify(&signature, &public_key, message)?);

        let faulty_message = b"Hello, not world!";
        assert!(!verifier.verify(&signature, &public_key, faulty_message)?);
        Ok(())
    }

    #[test]
    fn public_key_hashes_every_secret() {
        for params in [Params::default(), Params::sha256(), Params::sha512()] {
            let generator = KeyGenerator::new(params);
            let (private, public_key) = seeded_pair(params, 1);
            for bit in [false, true] {
                let secrets = private.half(bit);
                let hashes = public_key.half(bit);
                assert_eq!(secrets.len(), params.key_size());
                assert_eq!(hashes.len(), params.key_size());
                for (secret, hash) in secrets.iter().zip(hashes) {
                    assert_eq!(secret.len(), params.element_size());
                    assert_eq!(&params.hash().digest(secret), hash);
                    assert_ne!(&params.hash().digest(to_hex(secret)), hash);
                }
            }
            assert_eq!(generator.public_key(&private), public_key);
            assert_eq!(private.public_key(&params), public_key);
        }
    }

    #[test]
    fn private_keys_compare_in_constant_time() {
        let params = Params::default();
        let (private, _) = seeded_pair(params, 12);
        let (same, _) = seeded_pair(params, 12);
        let (other, _) = seeded_pair(params, 13);
        assert!(bool::from(private.ct_eq(&same)));
        assert!(!bool::from(private.ct_eq(&other)));

        let truncated = PrivateKey::from_halves([
            private.half(false)[..255].to_vec(),
            private.half(true)[..255].to_vec(),
        ]);
        assert!(!bool::from(private.ct_eq(&truncated)));
    }

    #[test]
    fn spent_key_survives_only_as_an_encoding() {
        let params = Params::default();
        let codec = crate::codec::Codec::new(params);
        let (private, public_key) = seeded_pair(params, 14);
        let kept = codec.encode_key(&private);
        let signature = Signer::new(params).sign(private, "one").unwrap();
        assert!(Verifier::new(params).verify(&signature, &public_key, "one").unwrap());

        let revived: PrivateKey = codec.decode_key(&kept).unwrap();
        assert_eq!(revived.public_key(&params), public_key);
    }

    #[test]
    fn halves_are_drawn_independently() {
        let (private, _) = seeded_pair(Params::default(), 2);
        assert_ne!(private.half(false), private.half(true));
    }

    #[test]
    fn signature_selects_by_digest_bit() {
        let params = Params::sha256();
        let (private, _) = seeded_pair(params, 3);
        let expected: Vec<Vec<u8>> = crate::bits::bit_decomposition(&params.hash().digest("abc"))
            .into_iter()
            .enumerate()
            .map(|(i, bit)| private.half(bit == 1)[i].clone())
            .collect();

        let signature = Signer::new(params).sign(private, "abc").unwrap();
        assert_eq!(signature.len(), params.key_size());
        assert_eq!(signature.elements(), expected.as_slice());
    }

    #[test]
    fn signing_is_deterministic() {
        let params = Params::default();
        let signer = Signer::new(params);
        let first = signer.sign(seeded_pair(params, 4).0, "same message").unwrap();
        let second = signer.sign(seeded_pair(params, 4).0, "same message").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn signature_for_other_message_is_rejected() {
        let params = Params::default();
        let (private, public_key) = seeded_pair(params, 5);
        let signature = Signer::new(params).sign(private, "one").unwrap();
        let verifier = Verifier::new(params);
        assert!(verifier.verify(&signature, &public_key, "one").unwrap());
        assert!(!verifier.verify(&signature, &public_key, "two").unwrap());
    }

    #[test]
    fn short_private_key_is_out_of_range() {
        let params = Params::default();
        let (private, _) = seeded_pair(params, 6);
        let truncated = PrivateKey::from_halves([
            private.half(false)[..10].to_vec(),
            private.half(true)[..10].to_vec(),
        ]);
        assert!(matches!(
            Signer::new(params).sign(truncated, "message"),
            Err(Error::OutOfRange { index: 10, len: 10, .. })
        ));
    }

    #[test]
    fn short_signature_is_out_of_range() {
        let params = Params::default();
        let (private, public_key) = seeded_pair(params, 7);
        let signature = Signer::new(params).sign(private, "message").unwrap();
        let short = Signature::from(signature.elements()[..100].to_vec());
        assert!(matches!(
            Verifier::new(params).verify(&short, &public_key, "message"),
            Err(Error::OutOfRange { index: 100, len: 100, what: "signature" })
        ));
    }

    #[test]
    fn short_public_key_is_out_of_range() {
        let params = Params::default();
        let (private, public_key) = seeded_pair(params, 8);
        let signature = Signer::new(params).sign(private, "message").unwrap();
        let short = PublicKey::from_halves([
            public_key.half(false)[..1].to_vec(),
            public_key.half(true)[..1].to_vec(),
        ]);
        assert!(matches!(
            Verifier::new(params).verify(&signature, &short, "message"),
            Err(Error::OutOfRange { index: 1, len: 1, what: "public key half" })
        ));
    }

    #[test]
    fn configurations_do_not_mix() {
        let (private, public_key) = seeded_pair(Params::default(), 9);
        let signature = Signer::new(Params::default()).sign(private, "message").unwrap();
        assert!(!Verifier::new(Params::sha256())
            .verify(&signature, &public_key, "message")
            .unwrap());
    }

    #[test]
    fn private_key_debug_hides_secrets() {
        let (private, _) = seeded_pair(Params::default(), 10);
        let rendered = format!("{private:?}");
        assert!(rendered.contains("key_size: 256"));
        assert!(!rendered.contains(&format!("{:?}", private.half(false)[0])));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64, .. ProptestConfig::default()
        })]

        #[test]
        fn really_works(s in "\\PC*", seed in any::<u64>()) {
            let params = Params::default();
            let (private, public_key) = seeded_pair(params, seed);
            let message = s.as_bytes();

            let signature = Signer::new(params).sign(private, message)?;
            prop_assert!(Verifier::new(params).verify(&signature, &public_key, message)?);
        }

        #[test]
        fn tampered_signature_fails(index in 0usize..256, byte in 0usize..32, flip in 1u8..=255) {
            let params = Params::default();
            let (private, public_key) = seeded_pair(params, 11);
            let signature = Signer::new(params).sign(private, "tamper")?;
            let mut elements: Vec<Vec<u8>> = signature.into();
            elements[index][byte] ^= flip;
            let tampered = Signature::from(elements);
            prop_assert!(!Verifier::new(params).verify(&tampered, &public_key, "tamper")?);
        }
    }
}
