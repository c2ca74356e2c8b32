use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use num_traits::Float;
use planfft::reference::{Slow, SlowPre};
use planfft::{Direction, FftEngine};
use rand::{distributions::Standard, prelude::Distribution, thread_rng, Rng};
use num_complex::Complex;

const LENGTHS: &[usize] = &[2, 7, 12, 17, 22];

// Sizes above this are too slow for the O(N^2) transforms
const MAX_SLOW_LOG_LEN: usize = 13;

fn generate_complex_numbers<T: Float + Default>(n: usize) -> Vec<Complex<T>>
where
    Standard: Distribution<T>,
{
    let mut rng = thread_rng();

    let samples: Vec<T> = (&mut rng).sample_iter(Standard).take(2 * n).collect();

    let mut signal = vec![Complex::default(); n];

    for (z, rand_chunk) in signal.iter_mut().zip(samples.chunks_exact(2)) {
        z.re = rand_chunk[0];
        z.im = rand_chunk[1];
    }

    signal
}

fn benchmark_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reference f64");

    for n in LENGTHS.iter().filter(|&&n| n <= MAX_SLOW_LOG_LEN) {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("Slow", len), |b| {
            b.iter_batched(
                || generate_complex_numbers::<f64>(len),
                |signal| Slow.transform(&signal),
                BatchSize::SmallInput,
            );
        });

        let slow_pre = SlowPre::<f64>::new(len);
        group.bench_function(BenchmarkId::new("SlowPre", len), |b| {
            b.iter_batched(
                || generate_complex_numbers::<f64>(len),
                |signal| slow_pre.transform(&signal),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

macro_rules! impl_benchmark_for {
    ($func_name:ident, $precision:ty, $group:literal, $direction:expr) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            let engine = FftEngine::<$precision>::new();

            for n in LENGTHS.iter() {
                let len = 1 << n;
                group.throughput(Throughput::Elements(len as u64));
                engine.prepare(len).unwrap();

                group.bench_function(BenchmarkId::new("planfft", len), |b| {
                    b.iter_batched(
                        || generate_complex_numbers::<$precision>(len),
                        |mut signal| engine.process(&mut signal, $direction).unwrap(),
                        BatchSize::SmallInput,
                    );
                });
            }
            group.finish();
        }
    };
}

impl_benchmark_for!(benchmark_forward_f32, f32, "Forward f32", Direction::Forward);
impl_benchmark_for!(benchmark_inverse_f32, f32, "Inverse f32", Direction::Reverse);
impl_benchmark_for!(benchmark_forward_f64, f64, "Forward f64", Direction::Forward);
impl_benchmark_for!(benchmark_inverse_f64, f64, "Inverse f64", Direction::Reverse);

criterion_group!(
    benches,
    benchmark_reference,
    benchmark_forward_f32,
    benchmark_inverse_f32,
    benchmark_forward_f64,
    benchmark_inverse_f64
);
criterion_main!(benches);
