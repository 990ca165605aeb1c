use nalgebra::vector;

use crate::{color::RGBA, volumetric::VolumeDataset};

/// Divisors used to normalize gradient and density.
///
/// `None` marks a zero divisor, the matching channels then fall back to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub range: Option<f32>,
    pub max: Option<f32>,
}

impl Normalization {
    pub fn for_dataset(dataset: &VolumeDataset) -> Normalization {
        let range = dataset.range().width();
        let max = dataset.max_value();
        Normalization {
            range: (range != 0).then(|| range as f32),
            max: (max != 0).then(|| max as f32),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.range.is_none()
    }
}

/// Central difference gradient (RGB) and density (A) of one voxel.
pub fn classify_voxel(dataset: &VolumeDataset, x: usize, y: usize, z: usize) -> RGBA {
    classify_with(dataset, &Normalization::for_dataset(dataset), x, y, z)
}

/// Neighbours are clamped to the grid, boundary voxels get a one-sided difference.
pub(crate) fn classify_with(
    dataset: &VolumeDataset,
    norm: &Normalization,
    x: usize,
    y: usize,
    z: usize,
) -> RGBA {
    let dims = dataset.dims();

    let x_plus = dataset.get((x + 1).min(dims.x - 1), y, z);
    let x_minus = dataset.get(x.saturating_sub(1), y, z);
    let y_plus = dataset.get(x, (y + 1).min(dims.y - 1), z);
    let y_minus = dataset.get(x, y.saturating_sub(1), z);
    let z_plus = dataset.get(x, y, (z + 1).min(dims.z - 1));
    let z_minus = dataset.get(x, y, z.saturating_sub(1));

    let gradient = match norm.range {
        Some(range) => vector![
            (x_plus - x_minus) as f32 / range,
            (y_plus - y_minus) as f32 / range,
            (z_plus - z_minus) as f32 / range
        ],
        None => vector![0.0, 0.0, 0.0],
    };

    let density = match norm.max {
        Some(max) => dataset.get(x, y, z) as f32 / max,
        None => 0.0,
    };

    vector![gradient.x, gradient.y, gradient.z, density]
}
