pub extern crate rustfft;

// export rustfft to planfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences agree element-wise, measuring the distance as `|a - b|`.
///
/// # Panics
///
/// Panics if the lengths differ or if any pair is `epsilon` or more apart
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (*a - *e).norm();
        if diff >= epsilon {
            panic!(
                "Assertion failed at index {i}: {a} too far from expected value {e} (diff {diff}, epsilon {epsilon})",
            );
        }
    }
}

/// Generate a random, complex, signal of length `len` with both components in `[-1, 1)`
pub fn gen_random_signal<T>(len: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    (0..len)
        .map(|_| Complex::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 16;
        let signal = gen_random_signal::<f64>(big_n);
        assert_eq!(signal.len(), big_n);

        for z in &signal {
            assert!((-1.0..1.0).contains(&z.re));
            assert!((-1.0..1.0).contains(&z.im));
        }

        // E[re^2 + im^2] = 2/3 for two independent uniforms on [-1, 1)
        let mean_power =
            signal.iter().map(|z| z.norm_sqr()).sum::<f64>() / big_n as f64;
        assert_float_closeness(mean_power, 2.0 / 3.0, 0.02);
    }

    #[test]
    fn complex_closeness_accepts_equal_sequences() {
        let a = vec![Complex::new(1.0, -2.0), Complex::new(0.5, 0.25)];
        assert_complex_closeness(&a, &a.clone(), 1e-12);
    }

    #[test]
    #[should_panic]
    fn complex_closeness_rejects_distant_values() {
        let a = vec![Complex::new(1.0, 0.0)];
        let b = vec![Complex::new(1.0, 0.1)];
        assert_complex_closeness(&a, &b, 1e-3);
    }
}
