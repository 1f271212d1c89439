//! Key and signature byte-layout packing, lifted from the per-polynomial
//! pack/unpack functions in `packing.rs` over the generic `K`/`L` vector
//! types in `polyvec.rs`.
//!
//! Each of `dilithium2`/`dilithium3`/`dilithium5` calls these generic
//! functions with its own literal `K`/`L` and mode parameters, slicing into
//! its own fixed-size byte arrays — this module never allocates or fixes a
//! byte length itself, matching §3's "SK = rho || K || tr || s1 || s2 || t0"
//! and "sig = c-tilde || z || h" layouts for any mode.

use crate::packing::{
    pack_eta, pack_hint, pack_t0, pack_t1, pack_z, unpack_eta, unpack_hint_into, unpack_t0,
    unpack_t1, unpack_z,
};
use crate::params::{POLYT0_PACKEDBYTES, POLYT1_PACKEDBYTES, SEEDBYTES, TRBYTES};
use crate::polyvec::PolyVec;
use crate::traits::SignatureError;

fn eta_bytes(eta: i32) -> usize {
    if eta == 2 {
        96
    } else {
        128
    }
}

fn z_bytes(gamma1_bits: u32) -> usize {
    if gamma1_bits == 17 {
        576
    } else {
        640
    }
}

/// Packs `rho || t1` into `out`. `out.len()` must be
/// `SEEDBYTES + K * POLYT1_PACKEDBYTES`.
pub fn pack_public_key<const K: usize>(rho: &[u8; 32], t1: &PolyVec<K>, out: &mut [u8]) {
    out[..SEEDBYTES].copy_from_slice(rho);
    for i in 0..K {
        let start = SEEDBYTES + i * POLYT1_PACKEDBYTES;
        pack_t1(&t1.polys[i], &mut out[start..start + POLYT1_PACKEDBYTES]);
    }
}

pub fn unpack_public_key<const K: usize>(bytes: &[u8]) -> Result<([u8; 32], PolyVec<K>), SignatureError> {
    if bytes.len() != SEEDBYTES + K * POLYT1_PACKEDBYTES {
        return Err(SignatureError::InvalidKeyLength);
    }
    let mut rho = [0u8; 32];
    rho.copy_from_slice(&bytes[..SEEDBYTES]);
    let mut t1 = PolyVec::<K>::zero();
    for i in 0..K {
        let start = SEEDBYTES + i * POLYT1_PACKEDBYTES;
        t1.polys[i] = unpack_t1(&bytes[start..start + POLYT1_PACKEDBYTES])?;
    }
    Ok((rho, t1))
}

/// Packs `rho || key_seed || tr || s1 || s2 || t0` into `out`.
#[allow(clippy::too_many_arguments)]
pub fn pack_secret_key<const K: usize, const L: usize>(
    rho: &[u8; 32],
    key_seed: &[u8; 32],
    tr: &[u8; 32],
    s1: &PolyVec<L>,
    s2: &PolyVec<K>,
    t0: &PolyVec<K>,
    eta: i32,
    out: &mut [u8],
) {
    let eb = eta_bytes(eta);
    let mut off = 0usize;
    out[off..off + SEEDBYTES].copy_from_slice(rho);
    off += SEEDBYTES;
    out[off..off + SEEDBYTES].copy_from_slice(key_seed);
    off += SEEDBYTES;
    out[off..off + TRBYTES].copy_from_slice(tr);
    off += TRBYTES;
    for i in 0..L {
        pack_eta(&s1.polys[i], eta, &mut out[off..off + eb]);
        off += eb;
    }
    for i in 0..K {
        pack_eta(&s2.polys[i], eta, &mut out[off..off + eb]);
        off += eb;
    }
    for i in 0..K {
        pack_t0(&t0.polys[i], &mut out[off..off + POLYT0_PACKEDBYTES]);
        off += POLYT0_PACKEDBYTES;
    }
}

/// The unpacked fields of a secret key, before NTT transformation.
pub struct UnpackedSecretKey<const K: usize, const L: usize> {
    pub rho: [u8; 32],
    pub key_seed: [u8; 32],
    pub tr: [u8; 32],
    pub s1: PolyVec<L>,
    pub s2: PolyVec<K>,
    pub t0: PolyVec<K>,
}

pub fn unpack_secret_key<const K: usize, const L: usize>(
    bytes: &[u8],
    eta: i32,
) -> Result<UnpackedSecretKey<K, L>, SignatureError> {
    let eb = eta_bytes(eta);
    let expected = 2 * SEEDBYTES + TRBYTES + L * eb + K * eb + K * POLYT0_PACKEDBYTES;
    if bytes.len() != expected {
        return Err(SignatureError::InvalidKeyLength);
    }
    let mut off = 0usize;
    let mut rho = [0u8; 32];
    rho.copy_from_slice(&bytes[off..off + SEEDBYTES]);
    off += SEEDBYTES;
    let mut key_seed = [0u8; 32];
    key_seed.copy_from_slice(&bytes[off..off + SEEDBYTES]);
    off += SEEDBYTES;
    let mut tr = [0u8; 32];
    tr.copy_from_slice(&bytes[off..off + TRBYTES]);
    off += TRBYTES;

    let mut s1 = PolyVec::<L>::zero();
    for i in 0..L {
        s1.polys[i] = unpack_eta(&bytes[off..off + eb], eta)?;
        off += eb;
    }
    let mut s2 = PolyVec::<K>::zero();
    for i in 0..K {
        s2.polys[i] = unpack_eta(&bytes[off..off + eb], eta)?;
        off += eb;
    }
    let mut t0 = PolyVec::<K>::zero();
    for i in 0..K {
        t0.polys[i] = unpack_t0(&bytes[off..off + POLYT0_PACKEDBYTES])?;
        off += POLYT0_PACKEDBYTES;
    }
    Ok(UnpackedSecretKey { rho, key_seed, tr, s1, s2, t0 })
}

/// Packs `c-tilde || z || h` into `out`.
#[allow(clippy::too_many_arguments)]
pub fn pack_signature<const K: usize, const L: usize>(
    c_tilde: &[u8; 32],
    z: &PolyVec<L>,
    hint: &PolyVec<K>,
    gamma1: i32,
    gamma1_bits: u32,
    omega: usize,
    out: &mut [u8],
) -> Result<(), SignatureError> {
    let zb = z_bytes(gamma1_bits);
    let mut off = 0usize;
    out[off..off + SEEDBYTES].copy_from_slice(c_tilde);
    off += SEEDBYTES;
    for i in 0..L {
        pack_z(&z.polys[i], gamma1, gamma1_bits, &mut out[off..off + zb]);
        off += zb;
    }
    pack_hint(&hint.polys, omega, &mut out[off..off + omega + K])
}

/// The unpacked fields of a signature.
pub struct UnpackedSignature<const K: usize, const L: usize> {
    pub c_tilde: [u8; 32],
    pub z: PolyVec<L>,
    pub hint: PolyVec<K>,
    pub hint_count: usize,
}

pub fn unpack_signature<const K: usize, const L: usize>(
    bytes: &[u8],
    gamma1: i32,
    gamma1_bits: u32,
    omega: usize,
) -> Result<UnpackedSignature<K, L>, SignatureError> {
    let zb = z_bytes(gamma1_bits);
    let expected = SEEDBYTES + L * zb + omega + K;
    if bytes.len() != expected {
        return Err(SignatureError::InvalidKeyLength);
    }
    let mut off = 0usize;
    let mut c_tilde = [0u8; 32];
    c_tilde.copy_from_slice(&bytes[off..off + SEEDBYTES]);
    off += SEEDBYTES;
    let mut z = PolyVec::<L>::zero();
    for i in 0..L {
        z.polys[i] = unpack_z(&bytes[off..off + zb], gamma1, gamma1_bits)?;
        off += zb;
    }
    let mut hint = PolyVec::<K>::zero();
    let hint_count = unpack_hint_into(&bytes[off..off + omega + K], omega, &mut hint.polys)?;
    Ok(UnpackedSignature { c_tilde, z, hint, hint_count })
}
