//! Pure-Rust, `no_std` implementation of CRYSTALS-Dilithium (FIPS 204 draft
//! pre-standard parameter sets), a lattice-based post-quantum signature
//! scheme, for security levels 2, 3, and 5.
//!
//! The library is organized leaf-first, mirroring the structure of the
//! reference algorithm: modular field arithmetic (`field`), the
//! Number-Theoretic Transform (`ntt`), single- and vector-polynomial
//! operations (`poly`, `polyvec`), power-of-two/decompose rounding
//! (`rounding`), SHAKE-based sampling (`sample`), bit-exact serialization
//! (`packing`, `keys`), the SHAKE/Keccak XOF wrapper (`xof`), and the
//! keygen/sign/verify orchestration (`scheme`), instantiated per mode by
//! [`dilithium2`], [`dilithium3`], and [`dilithium5`].
//!
//! No heap allocation occurs anywhere in the signature path: every key,
//! signature, and intermediate polynomial is a stack-resident fixed-size
//! array.
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

#![no_std]

pub mod field;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod rounding;
pub mod sample;
pub mod packing;
pub mod keys;
pub mod xof;
pub mod scheme;
pub mod traits;
pub mod utils;

pub mod dilithium2;
pub mod dilithium3;
pub mod dilithium5;
