use criterion::{criterion_group, criterion_main, Criterion};
use dilithium_native::dilithium2::Dilithium2;
use dilithium_native::dilithium3::Dilithium3;
use dilithium_native::dilithium5::Dilithium5;
use dilithium_native::traits::SignatureScheme;

macro_rules! bench_mode {
    ($fn_keygen:ident, $fn_sign:ident, $fn_verify:ident, $scheme:ty, $label:expr) => {
        fn $fn_keygen(c: &mut Criterion) {
            let seed = [0u8; 32];
            c.bench_function(concat!($label, "_keygen"), |b| {
                b.iter(|| {
                    <$scheme>::keypair_from_seed(&seed).unwrap();
                })
            });
        }

        fn $fn_sign(c: &mut Criterion) {
            let seed = [0u8; 32];
            let (_pk, sk) = <$scheme>::keypair_from_seed(&seed).unwrap();
            let msg = b"benchmark message";
            c.bench_function(concat!($label, "_sign"), |b| {
                b.iter(|| {
                    <$scheme>::sign(&sk, msg).unwrap();
                })
            });
        }

        fn $fn_verify(c: &mut Criterion) {
            let seed = [0u8; 32];
            let (pk, sk) = <$scheme>::keypair_from_seed(&seed).unwrap();
            let msg = b"benchmark message";
            let sig = <$scheme>::sign(&sk, msg).unwrap();
            c.bench_function(concat!($label, "_verify"), |b| {
                b.iter(|| {
                    <$scheme>::verify(&pk, msg, &sig).unwrap();
                })
            });
        }
    };
}

bench_mode!(bench_keygen2, bench_sign2, bench_verify2, Dilithium2, "dilithium2");
bench_mode!(bench_keygen3, bench_sign3, bench_verify3, Dilithium3, "dilithium3");
bench_mode!(bench_keygen5, bench_sign5, bench_verify5, Dilithium5, "dilithium5");

criterion_group!(
    benches,
    bench_keygen2,
    bench_sign2,
    bench_verify2,
    bench_keygen3,
    bench_sign3,
    bench_verify3,
    bench_keygen5,
    bench_sign5,
    bench_verify5,
);
criterion_main!(benches);
