//! Scalar rounding operations: `power2round`, `decompose`, `make_hint`, and
//! `use_hint`. These operate on single canonical-ish coefficients; `poly.rs`
//! lifts them coefficientwise over a `Poly`.
//!
//! Grounded on `examples/original_source/.../params.h` for the per-mode
//! `GAMMA2` values that select `decompose`'s fast path, and on spec.md §4.D
//! for the direct (non-magic-constant) `make_hint` definition.

use crate::field::{caddq, freeze};
use crate::params::{D, Q};

/// Splits `a` (any `i32`, not required to be canonical) into `(a1, a0)`
/// such that `a == a1 * 2^D + a0 mod q`, with `a0` in
/// `(-2^{D-1}, 2^{D-1}]`. Used to split `t` into `(t1, t0)` at keygen time.
pub fn power2round(a: i32) -> (i32, i32) {
    let a = freeze(a);
    let a1 = (a + (1 << (D - 1)) - 1) >> D;
    let a0 = a - (a1 << D);
    (a1, a0)
}

/// Splits `a` into `(a1, a0)` such that `a == a1 * (2*GAMMA2) + a0 mod q`,
/// with `a0` in `(-GAMMA2, GAMMA2]` (except for the boundary case folded
/// into `a1 == 0`, handled below exactly as the reference does). `gamma2`
/// must be one of the two values used by modes 2/3/5: `(Q-1)/88` or
/// `(Q-1)/32`; anything else falls back to a slow, still-correct path.
pub fn decompose(a: i32, gamma2: i32) -> (i32, i32) {
    let a = freeze(a);
    let mut a1 = (a + 127) >> 7;

    if gamma2 == (Q - 1) / 32 {
        a1 = (a1 * 1_025 + (1 << 21)) >> 22;
        a1 &= 15;
    } else if gamma2 == (Q - 1) / 88 {
        a1 = (a1 * 11_275 + (1 << 23)) >> 24;
        a1 ^= ((43 - a1) >> 31) & a1;
    } else {
        // Generic fallback: not used by modes 2/3/5, kept for completeness
        // and so `decompose` is total over its documented domain.
        let mut lo = a % (2 * gamma2);
        if lo > gamma2 {
            lo -= 2 * gamma2;
        }
        if a - lo == Q - 1 {
            return (0, lo - 1);
        }
        return ((a - lo) / (2 * gamma2), lo);
    }

    let mut a0 = a - a1 * 2 * gamma2;
    a0 -= (((Q - 1) / 2 - a0) >> 31) & Q;
    (a1, a0)
}

/// High-bits component of `decompose`.
pub fn high_bits(a: i32, gamma2: i32) -> i32 {
    decompose(a, gamma2).0
}

/// Low-bits component of `decompose`.
pub fn low_bits(a: i32, gamma2: i32) -> i32 {
    decompose(a, gamma2).1
}

/// `true` iff adding `z` to `r` changes the high bits, i.e. iff the
/// verifier needs a hint bit to reconstruct `HighBits(r + z)` from
/// `HighBits(r)` alone. Defined directly in terms of two `decompose`
/// calls rather than the single-comparison shortcut some implementations
/// use, since that shortcut's correctness is only as trustworthy as code
/// that has actually been run against it.
pub fn make_hint(z: i32, r: i32, gamma2: i32) -> bool {
    let r1 = high_bits(r, gamma2);
    let v1 = high_bits(caddq(r + z), gamma2);
    r1 != v1
}

/// Reconstructs `HighBits(r + z)` given only `HighBits(r)` and the hint bit
/// produced by `make_hint` for the same `(r, z, gamma2)`.
pub fn use_hint(r: i32, hint: bool, gamma2: i32) -> i32 {
    let m = (Q - 1) / (2 * gamma2);
    let (a1, a0) = decompose(r, gamma2);
    if !hint {
        return a1;
    }
    if a0 > 0 {
        (a1 + 1) % m
    } else {
        (a1 - 1).rem_euclid(m)
    }
}


/// Randomized checks over the full `i32` input space, rather than the
/// hand-picked boundary values above. Gated behind `property-tests` since
/// quickcheck's shrinking makes failures slower to report than the fixed
/// cases in `tests` above.
#[cfg(all(test, feature = "property-tests"))]
mod property_tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn power2round_always_reconstructs(a: i32) -> bool {
        let (a1, a0) = power2round(a);
        freeze(a1 * (1 << D) + a0) == freeze(a) && a0 > -(1 << (D - 1)) && a0 <= (1 << (D - 1))
    }

    #[quickcheck]
    fn decompose_always_reconstructs_mode2(a: i32) -> bool {
        let gamma2 = (Q - 1) / 88;
        let (a1, a0) = decompose(a, gamma2);
        freeze(a1 * 2 * gamma2 + a0) == freeze(a)
    }

    #[quickcheck]
    fn decompose_always_reconstructs_mode3_5(a: i32) -> bool {
        let gamma2 = (Q - 1) / 32;
        let (a1, a0) = decompose(a, gamma2);
        freeze(a1 * 2 * gamma2 + a0) == freeze(a)
    }

    #[quickcheck]
    fn make_hint_use_hint_agree(r: i32, z: i32) -> bool {
        let gamma2 = (Q - 1) / 88;
        let hint = make_hint(z, r, gamma2);
        let expected = high_bits(caddq(r + z), gamma2);
        use_hint(r, hint, gamma2) == expected
    }
}
