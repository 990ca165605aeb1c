use tracing::debug;

use super::{
    control_point::{evaluate, insert_sorted, AlphaPoint, ColorPoint},
    table::{cell_position, TfTable},
};
use crate::color::{self, RGB, RGBA};

/// Default number of entries of a generated table.
pub const TF_TABLE_WIDTH: usize = 512;

/// 1D transfer function, density to color and opacity.
///
/// Color and opacity have separate control points. The lookup table is only
/// valid after [`TransferFunction::generate`], adding a point invalidates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferFunction {
    color_points: Vec<ColorPoint>,
    alpha_points: Vec<AlphaPoint>,
    table: Option<TfTable>,
}

impl TransferFunction {
    pub fn new() -> TransferFunction {
        Default::default()
    }

    pub fn add_color_point(&mut self, position: f32, color: RGB) {
        insert_sorted(&mut self.color_points, ColorPoint::new(position, color));
        self.table = None;
    }

    pub fn add_alpha_point(&mut self, position: f32, alpha: f32) {
        insert_sorted(&mut self.alpha_points, AlphaPoint::new(position, alpha));
        self.table = None;
    }

    pub fn color_points(&self) -> &[ColorPoint] {
        &self.color_points
    }

    pub fn alpha_points(&self) -> &[AlphaPoint] {
        &self.alpha_points
    }

    pub fn is_empty(&self) -> bool {
        self.color_points.is_empty() && self.alpha_points.is_empty()
    }

    /// Evaluate at `position`. Missing color points give black,
    /// missing alpha points full transparency.
    pub fn sample(&self, position: f32) -> RGBA {
        let rgb = evaluate(&self.color_points, position)
            .unwrap_or_else(|| color::rgb(0.0, 0.0, 0.0));
        let alpha = evaluate(&self.alpha_points, position).unwrap_or(0.0);
        color::with_alpha(rgb, alpha)
    }

    /// Sample `width` evenly spaced positions over `[0;1]`.
    pub fn build_table(&self, width: usize) -> TfTable {
        let data = (0..width)
            .map(|i| self.sample(cell_position(i, width)))
            .collect();
        TfTable::new(data)
    }

    /// Rebuild and store the lookup table.
    pub fn generate(&mut self, width: usize) -> &TfTable {
        debug!(
            width,
            colors = self.color_points.len(),
            alphas = self.alpha_points.len(),
            "generating transfer function table"
        );
        let table = self.build_table(width);
        self.store_table(table)
    }

    pub(crate) fn store_table(&mut self, table: TfTable) -> &TfTable {
        self.table.insert(table)
    }

    /// `None` until generated, or after a point was added.
    pub fn table(&self) -> Option<&TfTable> {
        self.table.as_ref()
    }
}
