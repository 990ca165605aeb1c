use nalgebra::{vector, Vector3, Vector4};

/// Color with opacity, all channels as `f32`.
pub type RGBA = Vector4<f32>;

/// Color without opacity.
pub type RGB = Vector3<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn rgb(r: f32, g: f32, b: f32) -> RGB {
    vector![r, g, b]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn with_alpha(color: RGB, alpha: f32) -> RGBA {
    vector![color.x, color.y, color.z, alpha]
}

/// Flatten colors into `[r, g, b, a, r, g, b, a, ...]`.
pub fn flatten(colors: &[RGBA]) -> Vec<f32> {
    colors.iter().flat_map(|c| [c.x, c.y, c.z, c.w]).collect()
}
