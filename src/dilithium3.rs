//! Dilithium mode 3 (NIST security category 3): `K = 6`, `L = 5`, `eta = 4`.
//!
//! Instantiates the generic core in `scheme.rs` with this mode's literal
//! dimensions and mode parameters; byte-size constants match the table in
//! SPEC_FULL.md §3 (PK 1952 / SK 4000 / Sig 3293 bytes).

use rand_core::{CryptoRng, RngCore};

use crate::keys;
use crate::packing::pack_w1;
use crate::params::{POLYT0_PACKEDBYTES, POLYT1_PACKEDBYTES, Q, SEEDBYTES, TRBYTES};
use crate::polyvec::PolyVec;
use crate::scheme;
use crate::traits::{self, SignatureError, SignatureScheme};
use crate::xof::shake256;

pub const K: usize = 6;
pub const L: usize = 5;
pub const ETA: i32 = 4;
pub const TAU: usize = 49;
pub const BETA: i32 = TAU as i32 * ETA;
pub const GAMMA1: i32 = 1 << 19;
pub const GAMMA1_BITS: u32 = 19;
pub const GAMMA2: i32 = (Q - 1) / 32;
pub const OMEGA: usize = 55;

const ETA_PACKEDBYTES: usize = 128;
const Z_PACKEDBYTES: usize = 640;
const W1_PACKEDBYTES: usize = 128;

pub const PUBLIC_KEY_BYTES: usize = SEEDBYTES + K * POLYT1_PACKEDBYTES;
pub const SECRET_KEY_BYTES: usize =
    2 * SEEDBYTES + TRBYTES + L * ETA_PACKEDBYTES + K * ETA_PACKEDBYTES + K * POLYT0_PACKEDBYTES;
pub const SIGNATURE_BYTES: usize = SEEDBYTES + L * Z_PACKEDBYTES + OMEGA + K;

pub type PublicKey = traits::PublicKey<PUBLIC_KEY_BYTES>;
pub type SecretKey = traits::SecretKey<SECRET_KEY_BYTES>;
pub type Signature = traits::Signature<SIGNATURE_BYTES>;

/// Dilithium, security level 3.
pub struct Dilithium3;

fn pk_digest(rho: &[u8; 32], t1: &PolyVec<K>) -> [u8; 32] {
    let mut pk_bytes = [0u8; PUBLIC_KEY_BYTES];
    keys::pack_public_key(rho, t1, &mut pk_bytes);
    let mut tr = [0u8; 32];
    shake256(&[&pk_bytes], &mut tr);
    tr
}

fn keypair_from_seed_inner(seed: &[u8; 32]) -> (PublicKey, SecretKey) {
    let out = scheme::keygen::<K, L>(seed, ETA, pk_digest);
    let mut pk_bytes = [0u8; PUBLIC_KEY_BYTES];
    keys::pack_public_key(&out.rho, &out.t1, &mut pk_bytes);
    let mut sk_bytes = [0u8; SECRET_KEY_BYTES];
    keys::pack_secret_key(&out.rho, &out.key_seed, &out.tr, &out.s1, &out.s2, &out.t0, ETA, &mut sk_bytes);
    (PublicKey(pk_bytes), SecretKey(sk_bytes))
}

fn sign_inner(sk: &SecretKey, msg: &[u8], rnd: Option<[u8; 32]>) -> Result<Signature, SignatureError> {
    let unpacked = keys::unpack_secret_key::<K, L>(sk.as_ref(), ETA)?;
    let parts = scheme::sign::<K, L>(
        &unpacked.rho,
        &unpacked.key_seed,
        &unpacked.tr,
        &unpacked.s1,
        &unpacked.s2,
        &unpacked.t0,
        msg,
        rnd,
        ETA,
        TAU,
        BETA,
        GAMMA1,
        GAMMA1_BITS,
        GAMMA2,
        OMEGA,
        |p, out| pack_w1(p, GAMMA2, out),
        W1_PACKEDBYTES,
    )?;
    let mut sig_bytes = [0u8; SIGNATURE_BYTES];
    keys::pack_signature(&parts.c_tilde, &parts.z, &parts.hint, GAMMA1, GAMMA1_BITS, OMEGA, &mut sig_bytes)?;
    Ok(Signature(sig_bytes))
}

impl SignatureScheme for Dilithium3 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Signature = Signature;

    const PUBLIC_KEY_BYTES: usize = PUBLIC_KEY_BYTES;
    const SECRET_KEY_BYTES: usize = SECRET_KEY_BYTES;
    const SIGNATURE_BYTES: usize = SIGNATURE_BYTES;

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(PublicKey, SecretKey), SignatureError> {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Ok(keypair_from_seed_inner(&seed))
    }

    fn keypair_from_seed(seed: &[u8; 32]) -> Result<(PublicKey, SecretKey), SignatureError> {
        Ok(keypair_from_seed_inner(seed))
    }

    fn sign(sk: &SecretKey, msg: &[u8]) -> Result<Signature, SignatureError> {
        sign_inner(sk, msg, None)
    }

    fn sign_randomized<R: RngCore + CryptoRng>(
        sk: &SecretKey,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Signature, SignatureError> {
        let mut rnd = [0u8; 32];
        rng.fill_bytes(&mut rnd);
        sign_inner(sk, msg, Some(rnd))
    }

    fn verify(pk: &PublicKey, msg: &[u8], sig: &Signature) -> Result<(), SignatureError> {
        let (rho, t1) = keys::unpack_public_key::<K>(pk.as_ref())?;
        let tr = pk_digest(&rho, &t1);
        let unpacked = keys::unpack_signature::<K, L>(sig.as_ref(), GAMMA1, GAMMA1_BITS, OMEGA)?;

        scheme::verify::<K, L>(
            &rho,
            &tr,
            &t1,
            msg,
            &unpacked.c_tilde,
            &unpacked.z,
            &unpacked.hint,
            unpacked.hint_count,
            TAU,
            BETA,
            GAMMA1,
            GAMMA2,
            OMEGA,
            |p, out| pack_w1(p, GAMMA2, out),
            W1_PACKEDBYTES,
        )
    }
}
