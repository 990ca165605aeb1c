pub use criterion::{black_box, Criterion};

pub use nalgebra::{vector, Vector3};
pub use volume_core::{
    test_helpers::{encode_samples, ramp_dataset},
    volumetric::{ImportConfig, SampleFormat},
};

pub fn dims() -> Vector3<usize> {
    vector![128, 128, 64]
}

pub fn config() -> Criterion {
    Criterion::default().significance_level(0.1).sample_size(10)
}

pub fn raw_volume(format: SampleFormat) -> (Vec<u8>, ImportConfig) {
    let dataset = ramp_dataset(dims());
    let bytes = encode_samples(format, dataset.samples());
    (bytes, ImportConfig::new(dims(), format))
}
