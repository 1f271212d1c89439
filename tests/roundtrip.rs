//! Invariant 1 (spec.md §8): for every mode, `verify(pk, sign(sk, m), m)`
//! accepts, across a range of message lengths including the empty message.

use dilithium_native::dilithium2::Dilithium2;
use dilithium_native::dilithium3::Dilithium3;
use dilithium_native::dilithium5::Dilithium5;
use dilithium_native::traits::SignatureScheme;

fn roundtrip_for_lengths<S: SignatureScheme>(seed: [u8; 32], lengths: &[usize]) {
    let (pk, sk) = S::keypair_from_seed(&seed).unwrap();
    for &len in lengths {
        let msg: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let sig = S::sign(&sk, &msg).unwrap();
        assert!(
            S::verify(&pk, &msg, &sig).is_ok(),
            "roundtrip failed for message length {len}"
        );
    }
}

const LENGTHS: &[usize] = &[0, 1, 32, 33, 127, 1000, 8192];

#[test]
fn dilithium2_roundtrips_across_message_lengths() {
    roundtrip_for_lengths::<Dilithium2>([0u8; 32], LENGTHS);
}

#[test]
fn dilithium3_roundtrips_across_message_lengths() {
    roundtrip_for_lengths::<Dilithium3>([1u8; 32], LENGTHS);
}

#[test]
fn dilithium5_roundtrips_across_message_lengths() {
    roundtrip_for_lengths::<Dilithium5>([2u8; 32], LENGTHS);
}

#[test]
fn independent_keypairs_sign_independently() {
    let (pk_a, sk_a) = Dilithium2::keypair_from_seed(&[3u8; 32]).unwrap();
    let (pk_b, sk_b) = Dilithium2::keypair_from_seed(&[4u8; 32]).unwrap();
    let msg = b"cross-key test";

    let sig_a = Dilithium2::sign(&sk_a, msg).unwrap();
    let sig_b = Dilithium2::sign(&sk_b, msg).unwrap();

    assert!(Dilithium2::verify(&pk_a, msg, &sig_a).is_ok());
    assert!(Dilithium2::verify(&pk_b, msg, &sig_b).is_ok());
    // A signature from one key must not verify under the other's public key.
    assert!(Dilithium2::verify(&pk_b, msg, &sig_a).is_err());
    assert!(Dilithium2::verify(&pk_a, msg, &sig_b).is_err());
}

#[test]
fn many_seeds_and_message_lengths() {
    for seed_byte in 0u8..20 {
        let (pk, sk) = Dilithium2::keypair_from_seed(&[seed_byte; 32]).unwrap();
        for msg_len in (0..200).step_by(17) {
            let msg: Vec<u8> = (0..msg_len).map(|i| (i as u8).wrapping_add(seed_byte)).collect();
            let sig = Dilithium2::sign(&sk, &msg).unwrap();
            assert!(
                Dilithium2::verify(&pk, &msg, &sig).is_ok(),
                "failed for seed={seed_byte} msg_len={msg_len}"
            );
        }
    }
}
