use nalgebra::Vector3;

use crate::{config::Config, layout::linear_index};

use super::SampleGenerator;

/// Uniform white noise between zero and the configured sample.
/// Every sample is drawn from an RNG seeded by its position, so slices can be
/// generated in any order.
pub struct NoiseGenerator {
    dims: Vector3<usize>,
    seed: u64,
    low: i64,
    high: i64,
}

impl NoiseGenerator {
    pub fn from_config(config: &Config) -> NoiseGenerator {
        let sample = config.generator.sample();
        NoiseGenerator {
            dims: config.dims,
            seed: config.seed.unwrap_or_else(|| fastrand::u64(..)),
            low: sample.min(0),
            high: sample.max(0),
        }
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i64 {
        let index = linear_index(self.dims, coords) as u64;
        let rng = fastrand::Rng::new();
        rng.seed(self.seed ^ index);
        rng.i64(self.low..=self.high)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    fn generator(sample: i64, seed: u64) -> NoiseGenerator {
        NoiseGenerator {
            dims: vector![8, 8, 8],
            seed,
            low: sample.min(0),
            high: sample.max(0),
        }
    }

    #[test]
    fn negative_sample_spans_below_zero() {
        let gen = generator(-50, 3);
        let mut seen_negative = false;
        for i in 0..64 {
            let s = gen.sample_at(vector![i % 8, i / 8, 0]);
            assert!((-50..=0).contains(&s));
            seen_negative |= s < 0;
        }
        assert!(seen_negative);
    }

    #[test]
    fn same_position_same_sample() {
        let gen = generator(1000, 9);
        let a: Vec<_> = (0..8).map(|x| gen.sample_at(vector![x, 1, 2])).collect();
        let b: Vec<_> = (0..8).rev().map(|x| gen.sample_at(vector![x, 1, 2])).collect();
        assert_eq!(a, b.into_iter().rev().collect::<Vec<_>>());
        assert!(a.iter().any(|&s| s != a[0]));
    }

    #[test]
    fn seed_changes_output() {
        let a = generator(1000, 1);
        let b = generator(1000, 2);
        let differs =
            (0..8).any(|x| a.sample_at(vector![x, 0, 0]) != b.sample_at(vector![x, 0, 0]));
        assert!(differs);
    }
}
