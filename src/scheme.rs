//! Generic keygen/sign/verify core, shared by every mode.
//!
//! Every function here is generic over the const parameters `K` (rows,
//! length of `t`/`w`/`s2`) and `L` (columns, length of `s1`/`y`/`z`) rather
//! than over a per-mode trait: a trait's associated `const K: usize` cannot
//! be used as an array length on stable Rust without `generic_const_exprs`,
//! so `K`/`L` are pushed down to be the const-generic parameters themselves.
//! Byte-size arithmetic that depends on `K`/`L` (e.g. `OMEGA + K`) is kept
//! out of this module entirely and lives in `dilithium2`/`dilithium3`/
//! `dilithium5`, where `K`/`L` are literal constants.
//!
//! Grounded on the keygen/sign/verify control flow of
//! `other_examples/8f512a40_..._dilithium2.rs.rs`, generalized to the
//! const-generic `PolyVec`/`Matrix` types in `polyvec.rs`.

use crate::params::MAX_SIGN_ATTEMPTS;
use crate::poly::Poly;
use crate::polyvec::{Matrix, PolyVec};
use crate::sample::{challenge, uniform_eta, uniform_gamma1};
use crate::traits::SignatureError;
use crate::xof::shake256;

/// Upper bound (over all three modes) on `K * polyw1_packedbytes`, used to
/// size a fixed scratch buffer for hashing `w1` without per-mode generic
/// array arithmetic. Mode 2: 4*192=768; mode 3: 6*128=768; mode 5: 8*128=1024.
const MAX_W1_BYTES: usize = 1024;

/// The key-generation output, before per-mode byte packing.
pub struct KeygenOutput<const K: usize, const L: usize> {
    pub rho: [u8; 32],
    pub key_seed: [u8; 32],
    pub tr: [u8; 32],
    pub t1: PolyVec<K>,
    pub t0: PolyVec<K>,
    pub s1: PolyVec<L>,
    pub s2: PolyVec<K>,
}

/// The signing output, before per-mode byte packing.
pub struct SignedParts<const K: usize, const L: usize> {
    pub c_tilde: [u8; 32],
    pub z: PolyVec<L>,
    pub hint: PolyVec<K>,
    pub hint_count: usize,
}

/// Generates a keypair from a 32-byte seed.
///
/// `pk_digest` is a closure the concrete per-mode module supplies: it packs
/// `(rho, t1)` into the mode's public-key byte encoding and hashes it,
/// since `tr = SHAKE256(pk_bytes, 32)` depends on a byte layout this
/// generic module never materializes directly.
pub fn keygen<const K: usize, const L: usize>(
    seed: &[u8; 32],
    eta: i32,
    pk_digest: impl FnOnce(&[u8; 32], &PolyVec<K>) -> [u8; 32],
) -> KeygenOutput<K, L> {
    let mut expanded = [0u8; 128];
    shake256(&[seed], &mut expanded);
    let mut rho = [0u8; 32];
    let mut rho_prime = [0u8; 64];
    let mut key_seed = [0u8; 32];
    rho.copy_from_slice(&expanded[0..32]);
    rho_prime.copy_from_slice(&expanded[32..96]);
    key_seed.copy_from_slice(&expanded[96..128]);

    let a_hat = Matrix::<K, L>::expand(&rho);

    let mut s1 = PolyVec::<L>::zero();
    for i in 0..L {
        s1.polys[i] = uniform_eta(&rho_prime, i as u16, eta);
    }
    let mut s2 = PolyVec::<K>::zero();
    for i in 0..K {
        s2.polys[i] = uniform_eta(&rho_prime, (L + i) as u16, eta);
    }

    let s1_hat = s1.ntt();
    let mut as1_hat = a_hat.mul_vec(&s1_hat);
    // `mul_vec` accumulates L unreduced pointwise products; reduce before
    // `intt` so the Gentleman-Sande add-path can't overflow i32 (spec.md §9).
    as1_hat.reduce();
    let mut t = as1_hat.intt();
    t = t.add(&s2);
    t.reduce();

    let (t1, t0) = t.power2round();

    let tr = pk_digest(&rho, &t1);

    KeygenOutput { rho, key_seed, tr, t1, t0, s1, s2 }
}

/// Signs `msg` under the expanded secret key, optionally folding `rnd`
/// (hedged/randomized signing, spec.md §6) into the `rho'` derivation.
/// Retries with a fresh `kappa` offset on rejection, up to
/// `MAX_SIGN_ATTEMPTS` times.
#[allow(clippy::too_many_arguments)]
pub fn sign<const K: usize, const L: usize>(
    rho: &[u8; 32],
    key_seed: &[u8; 32],
    tr: &[u8; 32],
    s1: &PolyVec<L>,
    s2: &PolyVec<K>,
    t0: &PolyVec<K>,
    msg: &[u8],
    rnd: Option<[u8; 32]>,
    eta: i32,
    tau: usize,
    beta: i32,
    gamma1: i32,
    gamma1_bits: u32,
    gamma2: i32,
    omega: usize,
    pack_w1_poly: impl Fn(&Poly, &mut [u8]),
    w1_packed_len: usize,
) -> Result<SignedParts<K, L>, SignatureError> {
    let mut mu = [0u8; 64];
    shake256(&[tr, msg], &mut mu);

    let mut rho_prime = [0u8; 64];
    match rnd {
        Some(ref r) => shake256(&[key_seed, r, &mu], &mut rho_prime),
        None => shake256(&[key_seed, &mu], &mut rho_prime),
    }

    let a_hat = Matrix::<K, L>::expand(rho);
    let s1_hat = s1.ntt();
    let s2_hat = s2.ntt();
    let t0_hat = t0.ntt();

    let mut attempt: u32 = 0;
    loop {
        if attempt >= MAX_SIGN_ATTEMPTS {
            return Err(SignatureError::RejectionLimitExceeded);
        }
        let kappa = attempt as usize * L;

        let mut y = PolyVec::<L>::zero();
        for j in 0..L {
            y.polys[j] = uniform_gamma1(&rho_prime, (kappa + j) as u16, gamma1, gamma1_bits);
        }
        let y_hat = y.ntt();
        let mut w_hat = a_hat.mul_vec(&y_hat);
        w_hat.reduce();
        let w = w_hat.intt();
        let (w1, _) = w.decompose(gamma2);

        let mut w1_buf = [0u8; MAX_W1_BYTES];
        for i in 0..K {
            pack_w1_poly(&w1.polys[i], &mut w1_buf[i * w1_packed_len..(i + 1) * w1_packed_len]);
        }

        let mut c_tilde = [0u8; 32];
        shake256(&[&mu, &w1_buf[..K * w1_packed_len]], &mut c_tilde);

        let c = challenge(&c_tilde, tau);
        let c_hat = c.ntt();

        let cs1 = scale_and_intt::<L>(&c_hat, &s1_hat);
        let mut z = y.add(&cs1);
        z.reduce();
        if !z.check_norm(gamma1 - beta) {
            attempt += 1;
            continue;
        }

        let cs2 = scale_and_intt::<K>(&c_hat, &s2_hat);
        let r = w.sub(&cs2);
        let (_, r0) = r.decompose(gamma2);
        if !r0.check_norm(gamma2 - beta) {
            attempt += 1;
            continue;
        }

        let ct0 = scale_and_intt::<K>(&c_hat, &t0_hat);
        if !ct0.check_norm(gamma2) {
            attempt += 1;
            continue;
        }

        let (hint, hint_count) = r.make_hint(&ct0, gamma2);
        if hint_count > omega {
            attempt += 1;
            continue;
        }

        return Ok(SignedParts { c_tilde, z, hint, hint_count });
    }
}

/// Verifies `sig` (as its unpacked parts) against `msg` and the public key
/// digest `tr`.
#[allow(clippy::too_many_arguments)]
pub fn verify<const K: usize, const L: usize>(
    rho: &[u8; 32],
    tr: &[u8; 32],
    t1: &PolyVec<K>,
    msg: &[u8],
    c_tilde: &[u8; 32],
    z: &PolyVec<L>,
    hint: &PolyVec<K>,
    hint_count: usize,
    tau: usize,
    beta: i32,
    gamma1: i32,
    gamma2: i32,
    omega: usize,
    pack_w1_poly: impl Fn(&Poly, &mut [u8]),
    w1_packed_len: usize,
) -> Result<(), SignatureError> {
    if hint_count > omega {
        return Err(SignatureError::MalformedSignature);
    }
    if !z.check_norm(gamma1 - beta) {
        return Err(SignatureError::MalformedSignature);
    }

    let mut mu = [0u8; 64];
    shake256(&[tr, msg], &mut mu);

    let a_hat = Matrix::<K, L>::expand(rho);
    let z_hat = z.ntt();
    let az_hat = a_hat.mul_vec(&z_hat);

    let c = challenge(c_tilde, tau);
    let c_hat = c.ntt();

    let t1_shifted = {
        let mut shifted = PolyVec::<K>::zero();
        for i in 0..K {
            shifted.polys[i] = t1.polys[i].shift_left_d();
        }
        shifted
    };
    let t1_hat = t1_shifted.ntt();
    let ct1_hat = {
        let mut out = crate::polyvec::NttPolyVec::<K>::zero();
        for i in 0..K {
            out.polys[i] = c_hat.mul(&t1_hat.polys[i]);
        }
        out
    };

    let mut diff_hat = az_hat;
    for i in 0..K {
        diff_hat.polys[i] = diff_hat.polys[i].add(&negate(&ct1_hat.polys[i]));
    }
    diff_hat.reduce();
    let w_approx = diff_hat.intt();

    let w1_prime = w_approx.use_hint(hint, gamma2);

    let mut w1_buf = [0u8; MAX_W1_BYTES];
    for i in 0..K {
        pack_w1_poly(&w1_prime.polys[i], &mut w1_buf[i * w1_packed_len..(i + 1) * w1_packed_len]);
    }

    let mut c_tilde_prime = [0u8; 32];
    shake256(&[&mu, &w1_buf[..K * w1_packed_len]], &mut c_tilde_prime);

    use subtle::ConstantTimeEq;
    if bool::from(c_tilde_prime.ct_eq(c_tilde)) {
        Ok(())
    } else {
        Err(SignatureError::VerificationFailed)
    }
}

/// Multiplies an `N`-length NTT-domain vector by a single NTT-domain
/// polynomial (not a dot product: every entry is scaled independently),
/// then inverts — the pattern used for `c * s1`, `c * s2`, `c * t0`.
fn scale_and_intt<const NLEN: usize>(
    c_hat: &crate::poly::NttPoly,
    v_hat: &crate::polyvec::NttPolyVec<NLEN>,
) -> PolyVec<NLEN> {
    let mut scaled = crate::polyvec::NttPolyVec::<NLEN>::zero();
    for i in 0..NLEN {
        scaled.polys[i] = c_hat.mul(&v_hat.polys[i]);
    }
    scaled.intt()
}

/// Negates every coefficient of an NTT-domain polynomial (NTT is linear, so
/// negating before or after the transform is equivalent).
fn negate(p: &crate::poly::NttPoly) -> crate::poly::NttPoly {
    let mut out = *p;
    for c in out.coeffs.iter_mut() {
        *c = -*c;
    }
    out
}
