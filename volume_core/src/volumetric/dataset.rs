use nalgebra::Vector3;

use crate::{
    common::SampleRange,
    error::{ImportError, Result},
};

/// Decoded scalar volume.
///
/// Samples are stored X fastest: `index = x + y * dim_x + z * dim_x * dim_y`.
/// Immutable once built, the range always covers every sample.
#[derive(Clone, PartialEq, Eq)]
pub struct VolumeDataset {
    dims: Vector3<usize>,
    samples: Vec<i64>,
    range: SampleRange,
}

impl std::fmt::Debug for VolumeDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeDataset")
            .field("dims", &self.dims)
            .field("samples len", &self.samples.len())
            .field("range", &self.range)
            .finish()
    }
}

impl VolumeDataset {
    /// Build dataset from already decoded samples, computing their range.
    pub fn from_samples(dims: Vector3<usize>, samples: Vec<i64>) -> Result<VolumeDataset> {
        let expected = dims.x.checked_mul(dims.y).and_then(|v| v.checked_mul(dims.z));
        if dims.iter().any(|&d| d == 0) || expected != Some(samples.len()) {
            return Err(ImportError::InvalidDimensions {
                x: dims.x,
                y: dims.y,
                z: dims.z,
            });
        }
        let range = SampleRange::from_samples(samples.iter().copied());
        Ok(VolumeDataset {
            dims,
            samples,
            range,
        })
    }

    /// Decoder tracked the range in the same pass.
    pub(crate) fn from_parts(
        dims: Vector3<usize>,
        samples: Vec<i64>,
        range: SampleRange,
    ) -> VolumeDataset {
        debug_assert_eq!(samples.len(), dims.x * dims.y * dims.z);
        VolumeDataset {
            dims,
            samples,
            range,
        }
    }

    pub fn dims(&self) -> Vector3<usize> {
        self.dims
    }

    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    pub fn range(&self) -> SampleRange {
        self.range
    }

    pub fn min_value(&self) -> i64 {
        self.range.min
    }

    pub fn max_value(&self) -> i64 {
        self.range.max
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.dims.x + z * self.dims.x * self.dims.y
    }

    /// Panics outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> i64 {
        self.samples[self.index(x, y, z)]
    }

    pub fn get_checked(&self, x: usize, y: usize, z: usize) -> Option<i64> {
        if x >= self.dims.x || y >= self.dims.y || z >= self.dims.z {
            return None;
        }
        self.samples.get(self.index(x, y, z)).copied()
    }

    /// Samples of one Z slice.
    pub fn slice_z(&self, z: usize) -> &[i64] {
        let len = self.dims.x * self.dims.y;
        &self.samples[z * len..(z + 1) * len]
    }
}
