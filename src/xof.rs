//! SHAKE128/SHAKE256 extendable-output wrappers used for expansion and
//! sampling throughout key generation, signing, and verification.
//!
//! Thin layer over `sha3`'s `Shake128`/`Shake256`, exposing the
//! block-at-a-time squeeze the sampling routines in `sample.rs` rely on so
//! they can request more output without re-hashing input already consumed.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

/// SHAKE128-backed XOF, rate 168 bytes/block. Used to expand the public
/// matrix seed `rho` into `A-hat` and to sample masking/challenge
/// polynomials from their respective seeds.
pub struct Shake128Xof {
    reader: Shake128Reader,
}

impl Shake128Xof {
    pub const RATE: usize = 168;

    /// Absorb `parts` in order, then finalize into squeeze mode.
    pub fn new(parts: &[&[u8]]) -> Self {
        let mut hasher = Shake128::default();
        for part in parts {
            hasher.update(part);
        }
        Self { reader: hasher.finalize_xof() }
    }

    /// Squeeze exactly one 168-byte block.
    pub fn squeeze_block(&mut self) -> [u8; Self::RATE] {
        let mut block = [0u8; Self::RATE];
        self.reader.read(&mut block);
        block
    }

    /// Squeeze an arbitrary number of bytes into `out`.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

/// SHAKE256-backed XOF, rate 136 bytes/block. Used for `CRH`, secret-key
/// expansion (`sample_eta`), `rho'` derivation, masking-vector sampling
/// (`sample_gamma1`), and the challenge-polynomial derivation seed.
pub struct Shake256Xof {
    reader: Shake256Reader,
}

impl Shake256Xof {
    pub const RATE: usize = 136;

    pub fn new(parts: &[&[u8]]) -> Self {
        let mut hasher = Shake256::default();
        for part in parts {
            hasher.update(part);
        }
        Self { reader: hasher.finalize_xof() }
    }

    pub fn squeeze_block(&mut self) -> [u8; Self::RATE] {
        let mut block = [0u8; Self::RATE];
        self.reader.read(&mut block);
        block
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

/// One-shot SHAKE256 digest into a caller-sized output buffer (the
/// collision-resistant hash `CRH` used for `tr`, `mu`, and `rho'`).
pub fn shake256(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize_xof().read(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake256_is_deterministic() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        shake256(&[b"hello", b"world"], &mut a);
        shake256(&[b"hello", b"world"], &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_differ() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        shake256(&[b"hello"], &mut a);
        shake256(&[b"world"], &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn squeeze_block_then_more_is_contiguous_with_direct_squeeze() {
        let mut xof_a = Shake128Xof::new(&[b"seed"]);
        let first_block = xof_a.squeeze_block();

        let mut xof_b = Shake128Xof::new(&[b"seed"]);
        let mut direct = [0u8; Shake128Xof::RATE];
        xof_b.squeeze(&mut direct);

        assert_eq!(first_block, direct);
    }
}
