//! Core signature traits and types for the Dilithium signature library.
//!
//! # Example
//!
//! ```rust
//! use dilithium_native::dilithium2::Dilithium2;
//! use dilithium_native::traits::SignatureScheme;
//! use rand_core::OsRng;
//!
//! let (pk, sk) = Dilithium2::keypair(&mut OsRng).unwrap();
//! let msg = b"hello";
//! let sig = Dilithium2::sign(&sk, msg).unwrap();
//! assert!(Dilithium2::verify(&pk, msg, &sig).is_ok());
//! ```

use core::ops::Deref;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Error type for signature operations.
///
/// Deliberately coarse-grained: it distinguishes the categories spec.md §7
/// calls out (malformed input, authentication failure, resource exhaustion)
/// without echoing back *which* byte or bit failed a check, so a caller
/// cannot use the error variant itself as a decryption/forgery oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// A key or signature byte slice had the wrong length for this mode.
    #[error("key or signature has the wrong length for this mode")]
    InvalidKeyLength,
    /// A signature's structure is inconsistent (hint positions not strictly
    /// increasing, cumulative hint count exceeds Omega, non-zero bytes in
    /// the unused hint tail, or a `z` coefficient outside `(-GAMMA1, GAMMA1]`).
    #[error("signature is malformed")]
    MalformedSignature,
    /// The signature unpacked and bound-checked cleanly but the recomputed
    /// challenge digest did not match the one carried in the signature.
    #[error("signature verification failed")]
    VerificationFailed,
    /// The rejection-sampling loop in `sign` exceeded its sentinel bound
    /// (spec.md §7: astronomically unlikely, included only so the function
    /// is total).
    #[error("signing rejection loop exceeded its iteration sentinel")]
    RejectionLimitExceeded,
}

/// Trait for post-quantum signature schemes, implemented once per Dilithium
/// mode (`dilithium2::Dilithium2`, `dilithium3::Dilithium3`,
/// `dilithium5::Dilithium5`).
///
/// All operations are deterministic and constant-time with respect to
/// secret data where specified by each module; associated types are
/// fixed-size, stack-resident wrappers — never heap-allocated.
pub trait SignatureScheme {
    type PublicKey: AsRef<[u8]> + ConstantTimeEq + Clone + core::fmt::Debug;
    type SecretKey: AsRef<[u8]> + Zeroize + Clone + core::fmt::Debug;
    type Signature: AsRef<[u8]> + ConstantTimeEq + Clone + core::fmt::Debug;

    /// Byte length of `Self::PublicKey`.
    const PUBLIC_KEY_BYTES: usize;
    /// Byte length of `Self::SecretKey`.
    const SECRET_KEY_BYTES: usize;
    /// Byte length of `Self::Signature`.
    const SIGNATURE_BYTES: usize;

    /// Generate a keypair. Draws exactly one 32-byte seed from `rng`
    /// (spec.md §6: the core calls the randomness source exactly once, for
    /// keygen).
    fn keypair<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey), SignatureError>;

    /// Deterministic keypair generation from a caller-supplied 32-byte seed.
    /// Useful for KATs; `keypair` is the entry point ordinary callers want.
    fn keypair_from_seed(
        seed: &[u8; 32],
    ) -> Result<(Self::PublicKey, Self::SecretKey), SignatureError>;

    /// Sign deterministically: `rho'` is derived solely from the secret key
    /// and the message (spec.md §4.I, `RANDOMIZED_SIGNING = off`).
    fn sign(sk: &Self::SecretKey, msg: &[u8]) -> Result<Self::Signature, SignatureError>;

    /// Sign with hedged randomness: 32 fresh bytes from `rng` are folded
    /// into the `rho'` derivation (spec.md §6, `RANDOMIZED_SIGNING = on`).
    fn sign_randomized<R: RngCore + CryptoRng>(
        sk: &Self::SecretKey,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Self::Signature, SignatureError>;

    /// Verify a signature. `Ok(())` accepts; any `Err` rejects.
    fn verify(pk: &Self::PublicKey, msg: &[u8], sig: &Self::Signature) -> Result<(), SignatureError>;
}

/// Type-safe, fixed-size, stack-resident wrapper for public keys.
///
/// Implements constant-time equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<const N: usize>(pub [u8; N]);
impl<const N: usize> AsRef<[u8]> for PublicKey<N> {
    fn as_ref(&self) -> &[u8] { &self.0 }
}
impl<const N: usize> Deref for PublicKey<N> {
    type Target = [u8; N];
    fn deref(&self) -> &<Self as Deref>::Target { &self.0 }
}
impl<const N: usize> ConstantTimeEq for PublicKey<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}
impl<const N: usize> PublicKey<N> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        bytes.try_into().map(Self).map_err(|_| SignatureError::InvalidKeyLength)
    }
}

/// Type-safe, fixed-size, stack-resident wrapper for secret keys.
///
/// Zeroizes on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey<const N: usize>(pub [u8; N]);
impl<const N: usize> AsRef<[u8]> for SecretKey<N> {
    fn as_ref(&self) -> &[u8] { &self.0 }
}
impl<const N: usize> Deref for SecretKey<N> {
    type Target = [u8; N];
    fn deref(&self) -> &<Self as Deref>::Target { &self.0 }
}
impl<const N: usize> Zeroize for SecretKey<N> {
    fn zeroize(&mut self) { self.0.zeroize(); }
}
impl<const N: usize> Drop for SecretKey<N> {
    fn drop(&mut self) { self.zeroize(); }
}
impl<const N: usize> SecretKey<N> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        bytes.try_into().map(Self).map_err(|_| SignatureError::InvalidKeyLength)
    }
}

/// Type-safe, fixed-size, stack-resident wrapper for signatures.
///
/// Implements constant-time equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<const N: usize>(pub [u8; N]);
impl<const N: usize> AsRef<[u8]> for Signature<N> {
    fn as_ref(&self) -> &[u8] { &self.0 }
}
impl<const N: usize> Deref for Signature<N> {
    type Target = [u8; N];
    fn deref(&self) -> &<Self as Deref>::Target { &self.0 }
}
impl<const N: usize> ConstantTimeEq for Signature<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}
impl<const N: usize> Signature<N> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        bytes.try_into().map(Self).map_err(|_| SignatureError::InvalidKeyLength)
    }
}
