use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orderstat::cs::randomized::sample_without_replacement;
use orderstat::cs::sort::randomized_quickselect;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    for &n in &[100usize, 1000, 4000, 10_000] {
        let input = sample_without_replacement(n * 2, n, &mut rng).unwrap();
        let k = n / 2;

        group.bench_with_input(BenchmarkId::new("randomized_quickselect", n), &input, |b, input| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            b.iter(|| {
                let mut arr = input.clone();
                black_box(randomized_quickselect(&mut arr, black_box(k), &mut rng).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("select_nth_unstable", n), &input, |b, input| {
            b.iter(|| {
                let mut arr = input.clone();
                black_box(*arr.select_nth_unstable(black_box(k)).1)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
