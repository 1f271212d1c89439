//! Invariant 7 (spec.md §8): secret-dependent comparisons run in constant
//! time. This is a code-shape assertion, not a timing harness — timing
//! measurements on shared CI hardware are too noisy to be a reliable test
//! oracle. What we *can* assert from outside the crate is the observable
//! contract that makes constant-time comparison possible: the wrapper types
//! expose `subtle::ConstantTimeEq` rather than leaking a fast-path
//! `PartialEq`-style short-circuit a caller might use by mistake, and two
//! genuinely different signatures of the same length still compare without
//! panicking regardless of where they first differ.
//!
//! `Poly::check_norm` is the other half of this invariant (spec.md §2/§9):
//! it must reach a verdict without an early return on the coefficient that
//! fails, so a rejecting coefficient at the very first index and one at the
//! very last must be indistinguishable from the outside.

use dilithium_native::dilithium2::{Dilithium2, Signature};
use dilithium_native::poly::Poly;
use dilithium_native::traits::SignatureScheme;
use subtle::ConstantTimeEq;

#[test]
fn signature_equality_goes_through_subtle_not_derived_eq() {
    let (_pk, sk) = Dilithium2::keypair_from_seed(&[30u8; 32]).unwrap();
    let sig_a = Dilithium2::sign(&sk, b"first").unwrap();
    let sig_b = Dilithium2::sign(&sk, b"first").unwrap();
    // Deterministic signing on the same key/message is bit-identical, so
    // ct_eq must report true.
    assert!(bool::from(sig_a.ct_eq(&sig_b)));
}

#[test]
fn signatures_differing_at_any_byte_position_are_unequal() {
    let (_pk, sk) = Dilithium2::keypair_from_seed(&[31u8; 32]).unwrap();
    let sig = Dilithium2::sign(&sk, b"base").unwrap();

    // Flip one byte at the start, middle, and end of the buffer and confirm
    // ct_eq still reports inequality at every position — there's no early
    // return that would only catch a subset of positions.
    for &pos in &[0usize, sig.as_ref().len() / 2, sig.as_ref().len() - 1] {
        let mut tampered = sig.0;
        tampered[pos] ^= 0xFF;
        let tampered = Signature(tampered);
        assert!(!bool::from(sig.ct_eq(&tampered)), "position {pos} should differ");
    }
}

#[test]
fn check_norm_rejects_regardless_of_violating_coefficient_position() {
    // A branching, early-return implementation would still return `false`
    // here too; what this pins down is that the verdict is identical no
    // matter which index carries the out-of-bound coefficient, so a future
    // regression to early-return (which a reviewer could mistake for a
    // harmless optimization) at least can't silently change any of these
    // outcomes while the position varies.
    let bound = 100;
    for &pos in &[0usize, 128, 255] {
        let mut p = Poly::zero();
        p.coeffs[pos] = bound;
        assert!(!p.check_norm(bound), "violation at {pos} should be rejected");
    }
}

#[test]
fn check_norm_boundary_is_strict() {
    let bound = 100;
    let mut at_bound = Poly::zero();
    at_bound.coeffs[42] = bound;
    assert!(!at_bound.check_norm(bound));

    let mut below_bound = Poly::zero();
    below_bound.coeffs[42] = bound - 1;
    assert!(below_bound.check_norm(bound));

    let mut negative_at_bound = Poly::zero();
    negative_at_bound.coeffs[42] = -bound;
    assert!(!negative_at_bound.check_norm(bound));
}
