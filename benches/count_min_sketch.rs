use cmsketch::CountMinSketch;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fnv::FnvBuildHasher;
use rand::{thread_rng, Rng};
use rustc_hash::FxHasher;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

const WIDTH: usize = 4096;
const DEPTH: usize = 4;

// double hashing: row i uses h + i * l, as go-tinylfu does
fn coords<S: BuildHasher>(hasher: &S, key: u64) -> [usize; DEPTH] {
    let mut s = hasher.build_hasher();
    key.hash(&mut s);
    let h = s.finish();
    let l = h >> 32;
    let mut out = [0; DEPTH];
    out.iter_mut().enumerate().for_each(|(i, c)| {
        *c = (h.wrapping_add((i as u64).wrapping_mul(l)) % WIDTH as u64) as usize;
    });
    out
}

fn bench_with_hasher<S: BuildHasher + Default>(c: &mut Criterion, name: &str) {
    c.bench_function(name, move |b| {
        let cases = 1_000_000;
        b.iter_batched(
            || {
                let hasher = S::default();
                let mut rng = thread_rng();
                let keys: Vec<[usize; DEPTH]> = black_box(
                    (0..cases)
                        .map(|i| {
                            let k = if i % 2 == 0 {
                                rng.gen::<u64>() % 16384
                            } else {
                                rng.gen::<u64>() % 32768
                            };
                            coords(&hasher, k)
                        })
                        .collect(),
                );
                let s = CountMinSketch::<u32>::new(WIDTH, DEPTH).unwrap();
                (s, keys)
            },
            |(mut s, keys)| {
                keys.iter().for_each(|k| {
                    let _ = s.increment(k);
                });

                keys.iter().for_each(|k| {
                    let _ = black_box(s.estimate(k));
                });

                keys.iter().step_by(2).for_each(|k| {
                    let _ = s.decrement(k);
                });
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_count_min_sketch_default_hasher(c: &mut Criterion) {
    bench_with_hasher::<RandomState>(c, "Test CountMinSketch freq default hasher");
}

fn bench_count_min_sketch_fx_hasher(c: &mut Criterion) {
    bench_with_hasher::<BuildHasherDefault<FxHasher>>(c, "Test CountMinSketch freq FX hasher");
}

fn bench_count_min_sketch_fnv_hasher(c: &mut Criterion) {
    bench_with_hasher::<FnvBuildHasher>(c, "Test CountMinSketch freq FNV hasher");
}

fn bench_count_min_sketch_reset(c: &mut Criterion) {
    c.bench_function("Test CountMinSketch reset", move |b| {
        let mut s = CountMinSketch::<u32>::with_error_bounds(0.0001, 0.001).unwrap();
        b.iter(|| s.reset())
    });
}

criterion_group!(
    count_min_sketch,
    bench_count_min_sketch_default_hasher,
    bench_count_min_sketch_fx_hasher,
    bench_count_min_sketch_fnv_hasher,
    bench_count_min_sketch_reset
);

criterion_main!(count_min_sketch);
