//! Modular arithmetic in `Z_q`, `q = 8380417 = 2^23 - 2^13 + 1`.
//!
//! All functions operate on `i32` and assume inputs within the bounds
//! documented per-function. Grounded on the reduction routines that
//! accompany every from-scratch Dilithium NTT implementation; constants
//! cross-checked against `examples/original_source/Code/SW_benchmark/Dilithium-2/params.h`.

use crate::params::Q;

/// `-q^{-1} mod 2^32`, used by `montgomery_reduce`.
pub const QINV: i32 = 58_728_449;

/// Montgomery reduction: for `a` with `|a| <= 2^31 * Q` (fits in i64),
/// returns `r` with `r == a * 2^{-32} mod q` and `|r| <= Q`.
#[inline]
pub fn montgomery_reduce(a: i64) -> i32 {
    let t = (a as i32).wrapping_mul(QINV) as i64;
    let t = (a - t * Q as i64) >> 32;
    t as i32
}

/// Partial (Barrett-style) reduction: for any `i32` input, returns `r`
/// congruent to `a mod q` with `|r| <= 6_283_009` (i.e. roughly `0.75q`).
/// Does not produce a canonical representative; see `caddq`/`freeze` for that.
#[inline]
pub fn reduce32(a: i32) -> i32 {
    let mut t = (a + (1 << 22)) >> 23;
    t = a - t * Q;
    t
}

/// Adds `q` once if `a` is negative. Used after `reduce32` to land in
/// `[0, q)` when the sign of the input is already known to be the only
/// remaining offset.
#[inline]
pub fn caddq(a: i32) -> i32 {
    a + ((a >> 31) & Q)
}

/// Reduces `a` to the canonical representative in `[0, q)`.
/// Requires `-2^31 + q <= a < 2^31 - q`, satisfied by every call site in
/// this crate (coefficients never approach `i32` bounds before freezing).
#[inline]
pub fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}
