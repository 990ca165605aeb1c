//! Module with helper functions
//! Saves repetition in unit tests

use nalgebra::{vector, Vector3};

use crate::volumetric::{SampleFormat, VolumeDataset};

/// Encode samples the way a raw volume file stores them.
pub fn encode_samples(format: SampleFormat, samples: &[i64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * format.byte_width());
    for &sample in samples {
        format
            .write_sample(&mut bytes, sample)
            .expect("writing to Vec cannot fail");
    }
    bytes
}

/// `count` copies of `value`.
pub fn constant_bytes(format: SampleFormat, count: usize, value: i64) -> Vec<u8> {
    encode_samples(format, &vec![value; count])
}

/// Eight voxels with distinct values, `0` at the origin and `255` in the far corner.
pub fn cube_2x2x2() -> VolumeDataset {
    let data = vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255];
    VolumeDataset::from_samples(vector![2, 2, 2], data).unwrap()
}

/// Value grows with every coordinate, `x + 2y + 3z`.
pub fn ramp_dataset(dims: Vector3<usize>) -> VolumeDataset {
    let mut data = Vec::with_capacity(dims.x * dims.y * dims.z);
    for z in 0..dims.z {
        for y in 0..dims.y {
            for x in 0..dims.x {
                data.push((x + 2 * y + 3 * z) as i64);
            }
        }
    }
    VolumeDataset::from_samples(dims, data).unwrap()
}

/// 3x3x3 volume of `v` where the centre's neighbours are `v + 1` in the
/// positive and `v - 1` in the negative direction of every axis.
/// Two corners widen the range to `[0; 2v]`.
pub fn star_dataset(v: i64) -> VolumeDataset {
    let dims = vector![3, 3, 3];
    let mut data = vec![v; 27];
    let idx = |x: usize, y: usize, z: usize| x + 3 * y + 9 * z;

    data[idx(2, 1, 1)] = v + 1;
    data[idx(0, 1, 1)] = v - 1;
    data[idx(1, 2, 1)] = v + 1;
    data[idx(1, 0, 1)] = v - 1;
    data[idx(1, 1, 2)] = v + 1;
    data[idx(1, 1, 0)] = v - 1;
    data[idx(0, 0, 0)] = 0;
    data[idx(2, 2, 2)] = 2 * v;

    VolumeDataset::from_samples(dims, data).unwrap()
}
