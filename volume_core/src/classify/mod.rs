//! Gradient/classification engine
//!
//! Turns a [`VolumeDataset`] into a [`VoxelColorBuffer`]: normalized central
//! difference gradient in RGB, normalized density in A.
//! Voxels only read the dataset, so Z slices are computed in parallel.

mod gradient;
mod voxel_buffer;

pub use gradient::{classify_voxel, Normalization};
pub use voxel_buffer::VoxelColorBuffer;

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    color::{self, RGBA},
    volumetric::VolumeDataset,
};
use gradient::classify_with;

/// Classify every voxel, one Z slice per task.
pub fn classify(dataset: &VolumeDataset) -> VoxelColorBuffer {
    let start = Instant::now();
    let dims = dataset.dims();
    let norm = prepare(dataset);

    let slice_len = dims.x * dims.y;
    let mut data = vec![color::zero(); dataset.len()];

    data.par_chunks_mut(slice_len)
        .enumerate()
        .for_each(|(z, slice)| classify_slice(dataset, &norm, z, slice));

    debug!(
        voxels = data.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "classified volume"
    );

    VoxelColorBuffer::new(dims, data)
}

/// Single threaded reference, gives the same buffer as [`classify`].
pub fn classify_sequential(dataset: &VolumeDataset) -> VoxelColorBuffer {
    let dims = dataset.dims();
    let norm = prepare(dataset);

    let slice_len = dims.x * dims.y;
    let mut data = vec![color::zero(); dataset.len()];

    for (z, slice) in data.chunks_mut(slice_len).enumerate() {
        classify_slice(dataset, &norm, z, slice);
    }

    VoxelColorBuffer::new(dims, data)
}

fn prepare(dataset: &VolumeDataset) -> Normalization {
    let norm = Normalization::for_dataset(dataset);
    if norm.is_degenerate() {
        warn!(
            value = dataset.max_value(),
            "degenerate data range, gradient set to zero"
        );
    }
    norm
}

fn classify_slice(dataset: &VolumeDataset, norm: &Normalization, z: usize, slice: &mut [RGBA]) {
    let dim_x = dataset.dims().x;
    for (i, voxel) in slice.iter_mut().enumerate() {
        let x = i % dim_x;
        let y = i / dim_x;
        *voxel = classify_with(dataset, norm, x, y, z);
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;
    use crate::test_helpers::{cube_2x2x2, ramp_dataset};

    #[test]
    fn buffer_matches_dataset_len() {
        let ds = ramp_dataset(vector![5, 4, 3]);
        let buffer = classify(&ds);
        assert_eq!(buffer.len(), ds.len());
        assert_eq!(buffer.dims(), ds.dims());
        assert_eq!(buffer.to_f32_vec().len(), 4 * ds.len());
    }

    #[test]
    fn parallel_matches_sequential() {
        let ds = ramp_dataset(vector![7, 5, 9]);
        assert_eq!(classify(&ds), classify_sequential(&ds));
    }

    #[test]
    fn buffer_agrees_with_voxel_kernel() {
        let ds = cube_2x2x2();
        let buffer = classify(&ds);
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    assert_eq!(buffer.get(x, y, z), classify_voxel(&ds, x, y, z));
                }
            }
        }
    }

    #[test]
    fn ramp_has_constant_gradient_inside() {
        // value = x, so interior gradient along x is 2 / range
        let dims = vector![6, 2, 2];
        let samples = (0..24).map(|i| (i % 6) as i64).collect();
        let ds = VolumeDataset::from_samples(dims, samples).unwrap();
        let buffer = classify(&ds);

        for x in 1..5 {
            let voxel = buffer.get(x, 1, 1);
            assert_eq!(voxel.x, 2.0 / 5.0);
            assert_eq!(voxel.y, 0.0);
            assert_eq!(voxel.z, 0.0);
        }
        assert_eq!(buffer.get(0, 0, 0).x, 1.0 / 5.0);
        assert_eq!(buffer.get(5, 0, 0).x, 1.0 / 5.0);
    }

    #[test]
    fn all_zero_volume_is_finite() {
        let ds = VolumeDataset::from_samples(vector![3, 3, 3], vec![0; 27]).unwrap();
        let buffer = classify(&ds);
        assert!(buffer.to_f32_vec().iter().all(|v| *v == 0.0));
    }
}
