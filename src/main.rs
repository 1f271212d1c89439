//! `dilithium-gen`: a manual smoke-test CLI for generating a Dilithium
//! keypair and a sample signature.
//!
//! Not part of the cryptographic core (SPEC_FULL.md §1's "Out of scope"
//! list names platform bring-up, benchmark harnesses, and RNG sourcing as
//! external collaborators) — this binary is the only place in the crate
//! allowed to use `std`.

use dilithium_native::dilithium2::Dilithium2;
use dilithium_native::dilithium3::Dilithium3;
use dilithium_native::dilithium5::Dilithium5;
use dilithium_native::traits::SignatureScheme;
use rand_core::OsRng;
use std::env;

fn hex_encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

fn run<S: SignatureScheme>() {
    let (pk, sk) = S::keypair(&mut OsRng).expect("keygen");
    let msg = b"dilithium-gen smoke test";
    let sig = S::sign(&sk, msg).expect("sign");
    assert!(S::verify(&pk, msg, &sig).is_ok(), "self-signed signature failed to verify");
    println!("public key ({} bytes): {}", pk.as_ref().len(), hex_encode(pk.as_ref()));
    println!("signature  ({} bytes): {}", sig.as_ref().len(), hex_encode(sig.as_ref()));
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("2");

    match mode {
        "2" => run::<Dilithium2>(),
        "3" => run::<Dilithium3>(),
        "5" => run::<Dilithium5>(),
        other => {
            eprintln!("usage: dilithium-gen [2|3|5]  (got {other:?})");
            std::process::exit(1);
        }
    }
}
