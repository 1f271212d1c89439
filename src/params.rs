//! Shared constants for CRYSTALS-Dilithium (FIPS 204 draft), modes 2/3/5.
//!
//! Per-mode dimensions (K, L, ETA, ...) live in `dilithium2`/`dilithium3`/
//! `dilithium5`; everything here is common to all three modes.

/// Polynomial degree. Fixed across every mode.
pub const N: usize = 256;

/// Prime modulus q = 2^23 - 2^13 + 1.
pub const Q: i32 = 8_380_417;

/// Number of low-order bits of `t` dropped by `power2round`.
pub const D: u32 = 13;

/// 512th root of unity mod Q, i.e. the 2N-th root used to build the NTT table.
pub const ROOT_OF_UNITY: i32 = 1753;

/// Size in bytes of the public seed `rho`, the signing key `K`, and (per the
/// resolution in SPEC_FULL.md §3) the public-key digest `tr` packed into the
/// secret key.
pub const SEEDBYTES: usize = 32;

/// Size in bytes of the `tr` field packed into the secret key. Distinct from
/// the 64-byte length used for `mu` and `rho'` — see SPEC_FULL.md §3.
pub const TRBYTES: usize = 32;

/// Size in bytes of `mu = CRH(tr || M)` and `rho' = CRH(K || mu)`.
pub const CRHBYTES: usize = 64;

/// Packed size of a `t1` polynomial (10 bits/coefficient, fixed across modes).
pub const POLYT1_PACKEDBYTES: usize = 320;

/// Packed size of a `t0` polynomial (13 bits/coefficient, fixed across modes).
pub const POLYT0_PACKEDBYTES: usize = 416;

/// Upper bound the rejection loop in `sign` will run before giving up.
/// Never reached in practice — expected iteration count is a handful.
pub const MAX_SIGN_ATTEMPTS: u32 = 1_000_000;
