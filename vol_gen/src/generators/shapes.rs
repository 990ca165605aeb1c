use std::ops::RangeBounds;

use nalgebra::{vector, Vector3};

use crate::config::Config;

use super::SampleGenerator;

/// Generate volume with a number of randomly placed shapes
/// Background is zero, the first shape covering a sample wins
pub struct ShapesGenerator {
    shapes: Vec<ShapeInfo>,
}

impl ShapesGenerator {
    /// Shapes with sides around `obj_size`, values around `sample`
    pub fn new(
        config: &Config,
        n_of_shapes: usize,
        sample: i64,
        obj_size: usize,
    ) -> ShapesGenerator {
        let size = vector![obj_size, obj_size, obj_size];
        let size_variance = size / 10;
        let sample_range = config.format.limits();

        let random_shape_gen = ShapeInfoGenerator::new(
            config.dims,
            size,
            size_variance,
            sample,
            sample_range,
            config.seed,
        );
        let shapes = random_shape_gen.get_shapes(n_of_shapes);
        ShapesGenerator { shapes }
    }
}

impl SampleGenerator for ShapesGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> i64 {
        self.shapes
            .iter()
            .filter(|shape| shape.contains(coords))
            .find_map(|shape| shape.render_at(coords - shape.position_low))
            .unwrap_or(0)
    }
}

// # of enum ShapeType variants
const N_OF_SHAPE_KINDS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Cuboid,
    Sphere,
}

/// One shape in volume, bounds are inclusive
#[derive(Debug)]
pub struct ShapeInfo {
    pub position_low: Vector3<usize>,
    pub position_high: Vector3<usize>,
    pub shape_type: ShapeType,
    pub sample: i64,
}

impl ShapeInfo {
    #[must_use]
    pub fn new(
        position_low: Vector3<usize>,
        position_high: Vector3<usize>,
        shape_type: ShapeType,
        sample: i64,
    ) -> Self {
        Self {
            position_low,
            position_high,
            shape_type,
            sample,
        }
    }

    fn contains(&self, coords: Vector3<usize>) -> bool {
        (0..3).all(|i| coords[i] >= self.position_low[i] && coords[i] <= self.position_high[i])
    }

    /// `None` if the offset misses the shape inside its bounding box
    fn render_at(&self, offset: Vector3<usize>) -> Option<i64> {
        match self.shape_type {
            ShapeType::Cuboid => Some(self.sample),
            ShapeType::Sphere => self.render_sphere(offset),
        }
    }

    fn render_sphere(&self, offset: Vector3<usize>) -> Option<i64> {
        let extent = (self.position_high - self.position_low).cast::<f32>();
        let center = extent / 2.0;
        let r = extent.min() / 2.0;

        let length = offset.cast::<f32>() - center;
        (length.magnitude() <= r).then(|| self.sample)
    }
}

/// Generate shapes
/// Helper type
pub struct ShapeInfoGenerator {
    rng: fastrand::Rng,
    vol_dims: Vector3<usize>,
    size: Vector3<usize>,
    size_variance: Vector3<usize>,
    sample: i64,
    sample_range: (i64, i64),
}

const SAMPLE_VARIANCE: i64 = 10;

impl ShapeInfoGenerator {
    #[must_use]
    pub fn new(
        vol_dims: Vector3<usize>,
        size: Vector3<usize>,
        size_variance: Vector3<usize>,
        sample: i64,
        sample_range: (i64, i64),
        seed: Option<u64>,
    ) -> Self {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        Self {
            rng,
            vol_dims,
            size,
            size_variance,
            sample,
            sample_range,
        }
    }

    fn random_shape(&self) -> ShapeType {
        match self.rng.u8(0..N_OF_SHAPE_KINDS) {
            0 => ShapeType::Cuboid,
            _ => ShapeType::Sphere,
        }
    }

    fn random_vector<R>(&self, ranges: [R; 3]) -> Vector3<usize>
    where
        R: RangeBounds<usize>,
    {
        let [x, y, z] = ranges;
        vector![self.rng.usize(x), self.rng.usize(y), self.rng.usize(z)]
    }

    pub fn get_shapes(&self, n: usize) -> Vec<ShapeInfo> {
        (0..n).map(|_| self.get_shape()).collect()
    }

    pub fn get_shape(&self) -> ShapeInfo {
        let shape_type = self.random_shape();

        // Sides in <1;dims>
        let size_min = (self.size - self.size_variance)
            .zip_map(&self.vol_dims, |side, dim| side.max(1).min(dim));
        let size_max = (self.size + self.size_variance).zip_map(&self.vol_dims, usize::min);
        let size = self.random_vector([
            size_min.x..=size_max.x,
            size_min.y..=size_max.y,
            size_min.z..=size_max.z,
        ]);

        // Spawn shape in positions it fits
        let position_low = self.random_vector([
            0..=(self.vol_dims.x - size.x),
            0..=(self.vol_dims.y - size.y),
            0..=(self.vol_dims.z - size.z),
        ]);
        let position_high = position_low + size - vector![1, 1, 1];

        let sample = self.random_sample();

        ShapeInfo::new(position_low, position_high, shape_type, sample)
    }

    fn random_sample(&self) -> i64 {
        let (min, max) = self.sample_range;
        let low = self.sample.saturating_sub(SAMPLE_VARIANCE).max(min);
        let high = self.sample.saturating_add(SAMPLE_VARIANCE).min(max);
        self.rng.i64(low..=high)
    }
}
