use crate::color::{self, RGBA};

/// Sampled 1D transfer function, entry `i` holds position `i / (width - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TfTable {
    data: Vec<RGBA>,
}

impl TfTable {
    pub(crate) fn new(data: Vec<RGBA>) -> TfTable {
        TfTable { data }
    }

    pub fn width(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, i: usize) -> Option<RGBA> {
        self.data.get(i).copied()
    }

    pub fn as_slice(&self) -> &[RGBA] {
        &self.data
    }

    pub fn to_f32_vec(&self) -> Vec<f32> {
        color::flatten(&self.data)
    }
}

/// Sampled 2D transfer function, density along the width, gradient magnitude
/// along the height. Density is the fastest-varying axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tf2dTable {
    width: usize,
    height: usize,
    data: Vec<RGBA>,
}

impl Tf2dTable {
    pub(crate) fn new(width: usize, height: usize, data: Vec<RGBA>) -> Tf2dTable {
        assert_eq!(data.len(), width * height);
        Tf2dTable {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, density: usize, gradient: usize) -> Option<RGBA> {
        if density >= self.width || gradient >= self.height {
            return None;
        }
        self.data.get(density + gradient * self.width).copied()
    }

    pub fn as_slice(&self) -> &[RGBA] {
        &self.data
    }

    pub fn to_f32_vec(&self) -> Vec<f32> {
        color::flatten(&self.data)
    }
}

/// Position of table cell `i` out of `n`.
pub(crate) fn cell_position(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.0
    } else {
        i as f32 / (n - 1) as f32
    }
}
