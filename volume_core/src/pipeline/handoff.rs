//! Output contract towards a rendering host.
//!
//! The core never touches textures or materials, it only pushes finished
//! buffers through [`ArtifactSink`] and asks [`ExternalTextures`] for the
//! artifacts generated outside of it.

use nalgebra::Vector3;

use crate::{
    classify::VoxelColorBuffer,
    transfer_function::{Tf2dTable, TfTable},
    volumetric::VolumeDataset,
};

/// Side of the square noise texture requested from the host.
pub const NOISE_TEXTURE_SIZE: usize = 512;

/// Receives the artifacts of a finished pipeline.
pub trait ArtifactSink {
    /// RGBA 3D texture, X fastest, sampled clamp-to-edge.
    fn volume(&mut self, dims: Vector3<usize>, voxels: &VoxelColorBuffer);

    fn transfer_function(&mut self, table: &TfTable);

    fn transfer_function_2d(&mut self, table: &Tf2dTable);
}

/// Collaborators generating textures the core only passes along.
pub trait ExternalTextures {
    /// Opaque texture handle of the host.
    type Handle;

    /// Histogram of sample values, attached to the transfer function.
    fn histogram(&self, dataset: &VolumeDataset) -> Self::Handle;

    /// Procedural noise used to jitter ray starts.
    fn noise(&self, width: usize, height: usize) -> Self::Handle;
}

/// Handles returned by [`ExternalTextures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalHandles<H> {
    pub histogram: H,
    pub noise: H,
}
