//! Vectors and matrices of polynomials, and the matrix expansion routine
//! that turns the public seed `rho` into `A-hat`.
//!
//! `K` is the number of rows (length of `t`, `w`, `s2`), `L` the number of
//! columns (length of `s1`, `y`, `z`). Both are plain `const usize`
//! parameters rather than associated constants of a per-mode trait, so the
//! arithmetic here stays on stable Rust (no `generic_const_exprs`); the
//! concrete `dilithium2`/`dilithium3`/`dilithium5` modules fix `K`/`L` to
//! literals and derive their byte-size constants there.

use crate::params::N;
use crate::poly::{NttPoly, Poly};
use crate::sample;

/// A length-`K` vector of coefficient-domain polynomials.
#[derive(Clone, Copy, Debug)]
pub struct PolyVec<const K: usize> {
    pub polys: [Poly; K],
}

/// A length-`K` vector of NTT-domain polynomials.
#[derive(Clone, Copy, Debug)]
pub struct NttPolyVec<const K: usize> {
    pub polys: [NttPoly; K],
}

/// A `K x L` matrix of NTT-domain polynomials, `A-hat`.
#[derive(Clone, Copy, Debug)]
pub struct Matrix<const K: usize, const L: usize> {
    pub rows: [NttPolyVec<L>; K],
}

impl<const K: usize> PolyVec<K> {
    pub fn zero() -> Self {
        PolyVec { polys: [Poly::zero(); K] }
    }

    pub fn ntt(&self) -> NttPolyVec<K> {
        let mut out = NttPolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].ntt();
        }
        out
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut out = PolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].add(&other.polys[i]);
        }
        out
    }

    pub fn sub(&self, other: &Self) -> Self {
        let mut out = PolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].sub(&other.polys[i]);
        }
        out
    }

    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    pub fn freeze_all(&mut self) {
        for p in self.polys.iter_mut() {
            p.freeze_all();
        }
    }

    pub fn check_norm(&self, bound: i32) -> bool {
        self.polys.iter().all(|p| p.check_norm(bound))
    }

    pub fn power2round(&self) -> (Self, Self) {
        let mut t1 = PolyVec::zero();
        let mut t0 = PolyVec::zero();
        for i in 0..K {
            let (a1, a0) = self.polys[i].power2round();
            t1.polys[i] = a1;
            t0.polys[i] = a0;
        }
        (t1, t0)
    }

    pub fn decompose(&self, gamma2: i32) -> (Self, Self) {
        let mut hi = PolyVec::zero();
        let mut lo = PolyVec::zero();
        for i in 0..K {
            let (a1, a0) = self.polys[i].decompose(gamma2);
            hi.polys[i] = a1;
            lo.polys[i] = a0;
        }
        (hi, lo)
    }

    /// Coefficientwise `make_hint` against `other`, returning the hint
    /// vector and the total number of set bits across all `K` polynomials.
    pub fn make_hint(&self, other: &Self, gamma2: i32) -> (Self, usize) {
        let mut hints = PolyVec::zero();
        let mut count = 0usize;
        for i in 0..K {
            let (h, c) = self.polys[i].make_hint(&other.polys[i], gamma2);
            hints.polys[i] = h;
            count += c;
        }
        (hints, count)
    }

    pub fn use_hint(&self, hints: &Self, gamma2: i32) -> Self {
        let mut out = PolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].use_hint(&hints.polys[i], gamma2);
        }
        out
    }
}

impl<const K: usize> NttPolyVec<K> {
    pub fn zero() -> Self {
        NttPolyVec { polys: [NttPoly::zero(); K] }
    }

    pub fn intt(&self) -> PolyVec<K> {
        let mut out = PolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].intt();
        }
        out
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut out = NttPolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.polys[i].add(&other.polys[i]);
        }
        out
    }

    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// Inner product `sum_i self[i] * other[i]`, in the NTT domain.
    pub fn dot(&self, other: &Self) -> NttPoly {
        let mut acc = NttPoly::zero();
        for i in 0..K {
            acc = acc.add(&self.polys[i].mul(&other.polys[i]));
        }
        acc
    }
}

impl<const K: usize, const L: usize> Matrix<K, L> {
    /// Expands the public seed `rho` into `A-hat`, one `Shake128` XOF per
    /// matrix entry, via rejection sampling (`sample::uniform_poly`).
    /// Entry `(i, j)` is derived from `rho || j || i` (note the byte
    /// order: column index first), matching the convention carried over
    /// from `original_source/.../params.h`'s `polyvec_matrix_expand`.
    pub fn expand(rho: &[u8; 32]) -> Self {
        let mut rows: [NttPolyVec<L>; K] = [NttPolyVec::zero(); K];
        for i in 0..K {
            for j in 0..L {
                rows[i].polys[j] = sample::uniform_poly(rho, j as u8, i as u8);
            }
        }
        Matrix { rows }
    }

    /// Computes `A-hat * v-hat` for an `L`-length NTT-domain vector `v`,
    /// producing a `K`-length NTT-domain vector.
    pub fn mul_vec(&self, v: &NttPolyVec<L>) -> NttPolyVec<K> {
        let mut out = NttPolyVec::zero();
        for i in 0..K {
            out.polys[i] = self.rows[i].dot(v);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_expand_is_zero() {
        let v: PolyVec<4> = PolyVec::zero();
        for p in v.polys.iter() {
            assert_eq!(p.coeffs, [0i32; N]);
        }
    }

    #[test]
    fn matrix_expand_is_deterministic() {
        let rho = [7u8; 32];
        let a: Matrix<4, 4> = Matrix::expand(&rho);
        let b: Matrix<4, 4> = Matrix::expand(&rho);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(a.rows[i].polys[j].coeffs, b.rows[i].polys[j].coeffs);
            }
        }
    }
}
