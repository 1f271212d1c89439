//! Single-polynomial types and operations.
//!
//! `Poly` holds coefficients in the ordinary coefficient domain; `NttPoly`
//! holds the same 256 coefficients after the NTT, kept as a distinct type so
//! accidentally mixing domains is a compile error rather than a silent bug.

use crate::field::{freeze, reduce32};
use crate::ntt;
use crate::params::{D, N, Q};
use crate::rounding::{decompose, make_hint, power2round, use_hint};

/// A degree-256 polynomial over `Z_q`, coefficient domain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Poly {
    pub coeffs: [i32; N],
}

/// The same polynomial after the NTT; kept in the NTT-domain basis used for
/// pointwise multiplication against other `NttPoly` values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NttPoly {
    pub coeffs: [i32; N],
}

impl Default for Poly {
    fn default() -> Self {
        Poly { coeffs: [0; N] }
    }
}

impl Default for NttPoly {
    fn default() -> Self {
        NttPoly { coeffs: [0; N] }
    }
}

impl Poly {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Forward NTT, consuming `self`.
    pub fn ntt(mut self) -> NttPoly {
        ntt::ntt(&mut self.coeffs);
        NttPoly { coeffs: self.coeffs }
    }

    /// Coefficientwise addition mod q. Does not reduce to canonical form;
    /// call `reduce` before packing or comparing.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Poly::zero();
        for i in 0..N {
            out.coeffs[i] = self.coeffs[i] + other.coeffs[i];
        }
        out
    }

    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Poly::zero();
        for i in 0..N {
            out.coeffs[i] = self.coeffs[i] - other.coeffs[i];
        }
        out
    }

    /// Multiplies every coefficient by `2^D`. Used to lift `t0` back up
    /// before recombining with `t1` during verification.
    pub fn shift_left_d(&self) -> Self {
        let mut out = Poly::zero();
        for i in 0..N {
            out.coeffs[i] = self.coeffs[i] << D;
        }
        out
    }

    /// Reduces every coefficient to `|c| <= ~0.75q` (not canonical; see
    /// `freeze_all` when a canonical representative is required).
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce32(*c);
        }
    }

    /// Reduces every coefficient to the canonical representative in `[0, q)`.
    pub fn freeze_all(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = freeze(*c);
        }
    }

    /// `true` iff every coefficient's centered representative has absolute
    /// value strictly less than `bound`. Used to reject `z` and `r0`
    /// candidates outside the bounds `sign`'s rejection loop requires.
    ///
    /// Branchless and free of early exit by construction (spec.md §2/§9):
    /// every coefficient is centered, made absolute, and bound-checked via
    /// arithmetic masks rather than `if`/`return`, and the masks are folded
    /// into a single accumulator inspected only once, after the loop.
    pub fn check_norm(&self, bound: i32) -> bool {
        debug_assert!(bound <= (Q - 1) / 8);
        let mut over_acc: i32 = 0;
        for &c in self.coeffs.iter() {
            let c = freeze(c);
            // Center into (-q/2, q/2]: subtract q when c > (q-1)/2, via a
            // mask rather than a branch (same idiom as `field::caddq`).
            let above_half = c - ((Q - 1) / 2 + 1);
            let subtract_mask = !(above_half >> 31);
            let centered = c - (Q & subtract_mask);
            // Branchless absolute value.
            let sign = centered >> 31;
            let abs = (centered ^ sign) - sign;
            // Fold "abs >= bound" into the accumulator without branching.
            let diff = abs - bound;
            let ge_mask = !(diff >> 31);
            over_acc |= ge_mask;
        }
        over_acc == 0
    }

    /// Splits every coefficient via `power2round`, producing `(t1, t0)`.
    pub fn power2round(&self) -> (Poly, Poly) {
        let mut t1 = Poly::zero();
        let mut t0 = Poly::zero();
        for i in 0..N {
            let (a1, a0) = power2round(self.coeffs[i]);
            t1.coeffs[i] = a1;
            t0.coeffs[i] = a0;
        }
        (t1, t0)
    }

    /// Splits every coefficient via `decompose`, producing `(high, low)`.
    pub fn decompose(&self, gamma2: i32) -> (Poly, Poly) {
        let mut hi = Poly::zero();
        let mut lo = Poly::zero();
        for i in 0..N {
            let (a1, a0) = decompose(self.coeffs[i], gamma2);
            hi.coeffs[i] = a1;
            lo.coeffs[i] = a0;
        }
        (hi, lo)
    }

    /// Coefficientwise `make_hint` against `other`, returning the sparse
    /// hint polynomial (`1` where a hint bit is required, `0` elsewhere)
    /// and the number of set bits.
    pub fn make_hint(&self, other: &Poly, gamma2: i32) -> (Poly, usize) {
        let mut hints = Poly::zero();
        let mut count = 0usize;
        for i in 0..N {
            if make_hint(other.coeffs[i], self.coeffs[i], gamma2) {
                hints.coeffs[i] = 1;
                count += 1;
            }
        }
        (hints, count)
    }

    /// Coefficientwise `use_hint`, reconstructing high bits from `self`
    /// (the low-order signature component `w1` base) and a hint polynomial
    /// whose entries are `0`/`1`.
    pub fn use_hint(&self, hints: &Poly, gamma2: i32) -> Poly {
        let mut out = Poly::zero();
        for i in 0..N {
            out.coeffs[i] = use_hint(self.coeffs[i], hints.coeffs[i] != 0, gamma2);
        }
        out
    }
}

impl NttPoly {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Inverse NTT, consuming `self`. See `ntt::inv_ntt`'s doc comment:
    /// the result is only a correctly-scaled plain-domain polynomial when
    /// `self` is itself the output of at least one `pointwise_montgomery`
    /// multiplication — exactly how every call site in `polyvec.rs` uses it.
    pub fn intt(mut self) -> Poly {
        ntt::inv_ntt(&mut self.coeffs);
        Poly { coeffs: self.coeffs }
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut out = NttPoly::zero();
        for i in 0..N {
            out.coeffs[i] = self.coeffs[i] + other.coeffs[i];
        }
        out
    }

    /// Pointwise multiplication in the NTT domain.
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = NttPoly::zero();
        ntt::pointwise_montgomery(&mut out.coeffs, &self.coeffs, &other.coeffs);
        out
    }

    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce32(*c);
        }
    }
}
