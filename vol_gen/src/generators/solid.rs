use nalgebra::Vector3;

use crate::config::Config;

use super::SampleGenerator;

/// Generate solid volume
/// All sample values are the same
pub struct SolidGenerator {
    /// The sample value
    sample: i64,
}

impl SolidGenerator {
    pub fn from_config(config: &Config) -> SolidGenerator {
        SolidGenerator {
            sample: config.generator.sample(),
        }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, _coords: Vector3<usize>) -> i64 {
        self.sample
    }
}
