//! Invariant 3 (spec.md §8): `unpack . pack = identity` at the whole
//! key/signature level, exercised through the public API's `AsRef<[u8]>` /
//! `from_bytes` round trip (per-polynomial pack/unpack round trips live in
//! `src/packing.rs` and `src/keys.rs` unit tests).

use dilithium_native::dilithium2::{self, Dilithium2};
use dilithium_native::dilithium3::{self, Dilithium3};
use dilithium_native::dilithium5::{self, Dilithium5};
use dilithium_native::traits::SignatureScheme;

#[test]
fn dilithium2_key_and_signature_byte_lengths_are_fixed() {
    let (pk, sk) = Dilithium2::keypair_from_seed(&[7u8; 32]).unwrap();
    let sig = Dilithium2::sign(&sk, b"length check").unwrap();
    assert_eq!(pk.as_ref().len(), dilithium2::PUBLIC_KEY_BYTES);
    assert_eq!(sk.as_ref().len(), dilithium2::SECRET_KEY_BYTES);
    assert_eq!(sig.as_ref().len(), dilithium2::SIGNATURE_BYTES);
}

#[test]
fn dilithium2_public_key_roundtrips_through_bytes() {
    let (pk, _sk) = Dilithium2::keypair_from_seed(&[8u8; 32]).unwrap();
    let bytes = pk.as_ref().to_vec();
    let pk2 = dilithium2::PublicKey::from_bytes(&bytes).unwrap();
    assert_eq!(pk.as_ref(), pk2.as_ref());
}

#[test]
fn dilithium2_secret_key_roundtrips_through_bytes_and_still_signs() {
    let (pk, sk) = Dilithium2::keypair_from_seed(&[9u8; 32]).unwrap();
    let bytes = sk.as_ref().to_vec();
    let sk2 = dilithium2::SecretKey::from_bytes(&bytes).unwrap();
    let msg = b"sk roundtrip";
    let sig = Dilithium2::sign(&sk2, msg).unwrap();
    assert!(Dilithium2::verify(&pk, msg, &sig).is_ok());
}

#[test]
fn dilithium2_signature_roundtrips_through_bytes() {
    let (pk, sk) = Dilithium2::keypair_from_seed(&[10u8; 32]).unwrap();
    let msg = b"sig roundtrip";
    let sig = Dilithium2::sign(&sk, msg).unwrap();
    let bytes = sig.as_ref().to_vec();
    let sig2 = dilithium2::Signature::from_bytes(&bytes).unwrap();
    assert!(Dilithium2::verify(&pk, msg, &sig2).is_ok());
}

#[test]
fn wrong_length_inputs_are_rejected_not_panicked() {
    assert!(dilithium2::PublicKey::from_bytes(&[0u8; 10]).is_err());
    assert!(dilithium2::SecretKey::from_bytes(&[0u8; 10]).is_err());
    assert!(dilithium2::Signature::from_bytes(&[0u8; 10]).is_err());
}

#[test]
fn dilithium3_and_dilithium5_byte_lengths_match_mode_constants() {
    let (pk3, sk3) = Dilithium3::keypair_from_seed(&[11u8; 32]).unwrap();
    let sig3 = Dilithium3::sign(&sk3, b"mode 3").unwrap();
    assert_eq!(pk3.as_ref().len(), dilithium3::PUBLIC_KEY_BYTES);
    assert_eq!(sk3.as_ref().len(), dilithium3::SECRET_KEY_BYTES);
    assert_eq!(sig3.as_ref().len(), dilithium3::SIGNATURE_BYTES);

    let (pk5, sk5) = Dilithium5::keypair_from_seed(&[12u8; 32]).unwrap();
    let sig5 = Dilithium5::sign(&sk5, b"mode 5").unwrap();
    assert_eq!(pk5.as_ref().len(), dilithium5::PUBLIC_KEY_BYTES);
    assert_eq!(sk5.as_ref().len(), dilithium5::SECRET_KEY_BYTES);
    assert_eq!(sig5.as_ref().len(), dilithium5::SIGNATURE_BYTES);
}
