use nalgebra::Vector3;

use crate::color::{self, RGBA};

/// One RGBA value per voxel, indexed like [`crate::volumetric::VolumeDataset`].
///
/// RGB holds the signed gradient, A the density. Values are not clamped.
#[derive(Clone, PartialEq)]
pub struct VoxelColorBuffer {
    dims: Vector3<usize>,
    data: Vec<RGBA>,
}

impl std::fmt::Debug for VoxelColorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelColorBuffer")
            .field("dims", &self.dims)
            .field("data len", &self.data.len())
            .finish()
    }
}

impl VoxelColorBuffer {
    pub(crate) fn new(dims: Vector3<usize>, data: Vec<RGBA>) -> VoxelColorBuffer {
        assert_eq!(
            data.len(),
            dims.x * dims.y * dims.z,
            "voxel buffer length does not match dimensions"
        );
        VoxelColorBuffer { dims, data }
    }

    pub fn dims(&self) -> Vector3<usize> {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> RGBA {
        self.data[x + y * self.dims.x + z * self.dims.x * self.dims.y]
    }

    pub fn as_slice(&self) -> &[RGBA] {
        &self.data
    }

    /// Flattened `[r, g, b, a, ...]`, the layout of an RGBA float 3D texture.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        color::flatten(&self.data)
    }
}
