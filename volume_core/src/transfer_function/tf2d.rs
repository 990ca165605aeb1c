use std::ops::RangeInclusive;

use tracing::debug;

use super::{
    control_point::clamp_unit,
    table::{cell_position, Tf2dTable},
};
use crate::color::{self, RGB, RGBA};

/// Default resolution of a generated 2D table, both axes.
pub const TF2D_TABLE_SIZE: usize = 512;

/// Axis aligned rectangle in (density, gradient magnitude) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfBox {
    pub density_min: f32,
    pub density_max: f32,
    pub gradient_min: f32,
    pub gradient_max: f32,
    pub color: RGB,
    pub opacity: f32,
}

impl TfBox {
    /// Bounds given in the wrong order are swapped, a NaN bound becomes 0.
    pub fn new(
        density: (f32, f32),
        gradient: (f32, f32),
        color: RGB,
        opacity: f32,
    ) -> TfBox {
        let (density_min, density_max) = ordered(density);
        let (gradient_min, gradient_max) = ordered(gradient);
        TfBox {
            density_min,
            density_max,
            gradient_min,
            gradient_max,
            color,
            opacity: clamp_unit(opacity),
        }
    }

    pub fn contains(&self, density: f32, gradient: f32) -> bool {
        self.density_min <= density
            && density <= self.density_max
            && self.gradient_min <= gradient
            && gradient <= self.gradient_max
    }

    pub fn rgba(&self) -> RGBA {
        color::with_alpha(self.color, self.opacity)
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    let nan_to_zero = |v: f32| if v.is_nan() { 0.0 } else { v };
    let (a, b) = (nan_to_zero(a), nan_to_zero(b));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// 2D transfer function made of possibly overlapping boxes.
///
/// Overlaps are resolved by insertion order, a later box overwrites earlier
/// ones inside its area. Cells covered by no box are transparent black.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferFunction2D {
    boxes: Vec<TfBox>,
    table: Option<Tf2dTable>,
}

impl TransferFunction2D {
    pub fn new() -> TransferFunction2D {
        Default::default()
    }

    pub fn add_box(
        &mut self,
        density_min: f32,
        density_max: f32,
        gradient_min: f32,
        gradient_max: f32,
        color: RGB,
        opacity: f32,
    ) {
        self.boxes.push(TfBox::new(
            (density_min, density_max),
            (gradient_min, gradient_max),
            color,
            opacity,
        ));
        self.table = None;
    }

    pub fn boxes(&self) -> &[TfBox] {
        &self.boxes
    }

    /// Color of the last added box covering the point.
    pub fn sample(&self, density: f32, gradient: f32) -> RGBA {
        self.boxes
            .iter()
            .rev()
            .find(|b| b.contains(density, gradient))
            .map(TfBox::rgba)
            .unwrap_or_else(color::zero)
    }

    /// Rasterize boxes in insertion order.
    pub fn build_table(&self, width: usize, height: usize) -> Tf2dTable {
        let mut data = vec![color::zero(); width * height];

        for tf_box in &self.boxes {
            let (columns, rows) = match (
                cell_span(tf_box.density_min, tf_box.density_max, width),
                cell_span(tf_box.gradient_min, tf_box.gradient_max, height),
            ) {
                (Some(c), Some(r)) => (c, r),
                _ => continue,
            };
            let value = tf_box.rgba();
            for row in rows {
                data[row * width + columns.start()..=row * width + columns.end()].fill(value);
            }
        }

        Tf2dTable::new(width, height, data)
    }

    pub fn generate(&mut self, width: usize, height: usize) -> &Tf2dTable {
        debug!(
            width,
            height,
            boxes = self.boxes.len(),
            "generating 2D transfer function table"
        );
        let table = self.build_table(width, height);
        self.table.insert(table)
    }

    pub fn table(&self) -> Option<&Tf2dTable> {
        self.table.as_ref()
    }
}

/// Cells whose position falls inside `[min; max]`.
fn cell_span(min: f32, max: f32, n: usize) -> Option<RangeInclusive<usize>> {
    if n == 0 {
        return None;
    }
    if n == 1 {
        let pos = cell_position(0, 1);
        return (min <= pos && pos <= max).then(|| 0..=0);
    }
    let last = (n - 1) as f32;
    let low = (min * last).ceil().max(0.0);
    let high = (max * last).floor().min(last);
    if low > high {
        return None;
    }
    Some(low as usize..=high as usize)
}

#[cfg(test)]
mod test {
    use super::*;

    fn white() -> RGB {
        color::rgb(1.0, 1.0, 1.0)
    }

    #[test]
    fn box_covers_its_cells() {
        let mut tf = TransferFunction2D::new();
        tf.add_box(0.25, 0.5, 0.0, 1.0, white(), 0.4);
        let table = tf.generate(5, 5);

        for g in 0..5 {
            for d in 0..5 {
                let cell = table.get(d, g).unwrap();
                if d == 1 || d == 2 {
                    assert_eq!(cell, color::new(1.0, 1.0, 1.0, 0.4));
                } else {
                    assert_eq!(cell, color::zero());
                }
            }
        }
    }

    #[test]
    fn later_box_overwrites() {
        let mut tf = TransferFunction2D::new();
        tf.add_box(0.0, 1.0, 0.0, 1.0, color::rgb(1.0, 0.0, 0.0), 0.2);
        tf.add_box(0.5, 1.0, 0.5, 1.0, color::rgb(0.0, 1.0, 0.0), 0.8);
        let table = tf.generate(3, 3);

        assert_eq!(table.get(0, 0), Some(color::new(1.0, 0.0, 0.0, 0.2)));
        assert_eq!(table.get(1, 1), Some(color::new(0.0, 1.0, 0.0, 0.8)));
        assert_eq!(table.get(2, 2), Some(color::new(0.0, 1.0, 0.0, 0.8)));
        assert_eq!(table.get(2, 0), Some(color::new(1.0, 0.0, 0.0, 0.2)));

        assert_eq!(tf.sample(0.75, 0.75), color::new(0.0, 1.0, 0.0, 0.8));
        assert_eq!(tf.sample(0.1, 0.9), color::new(1.0, 0.0, 0.0, 0.2));
    }

    #[test]
    fn table_agrees_with_sample() {
        let mut tf = TransferFunction2D::new();
        tf.add_box(0.1, 0.6, 0.2, 0.9, white(), 0.5);
        tf.add_box(0.4, 0.8, 0.0, 0.3, color::rgb(0.2, 0.3, 0.4), 1.0);
        let table = tf.build_table(9, 7);

        for g in 0..7 {
            for d in 0..9 {
                let expected = tf.sample(d as f32 / 8.0, g as f32 / 6.0);
                assert_eq!(table.get(d, g), Some(expected), "cell {d} {g}");
            }
        }
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let b = TfBox::new((0.8, 0.2), (0.1, 0.7), white(), 0.4);
        assert_eq!(b.density_min, 0.2);
        assert_eq!(b.density_max, 0.8);
        assert!(b.contains(0.5, 0.5));
    }

    #[test]
    fn nan_bound_is_zero() {
        let mut tf = TransferFunction2D::new();
        tf.add_box(f32::NAN, 0.5, 0.0, 1.0, white(), 1.0);
        assert_eq!(tf.boxes()[0].density_min, 0.0);

        let table = tf.generate(5, 5).clone();
        let painted = table.as_slice().iter().filter(|c| **c != color::zero()).count();
        assert_eq!(painted, 15);
        for g in 0..5 {
            for d in 0..5 {
                let expected = tf.sample(d as f32 / 4.0, g as f32 / 4.0);
                assert_eq!(table.get(d, g), Some(expected), "cell {d} {g}");
            }
        }
    }

    #[test]
    fn empty_function_is_transparent() {
        let mut tf = TransferFunction2D::new();
        let table = tf.generate(4, 4);
        assert!(table.as_slice().iter().all(|c| *c == color::zero()));
        assert_eq!(table.width(), 4);
        assert_eq!(table.height(), 4);
    }

    #[test]
    fn box_outside_grid_is_skipped() {
        let mut tf = TransferFunction2D::new();
        tf.add_box(1.5, 2.0, 0.0, 1.0, white(), 1.0);
        tf.add_box(0.3, 0.35, 0.0, 1.0, white(), 1.0);
        let table = tf.generate(3, 3);
        assert!(table.as_slice().iter().all(|c| *c == color::zero()));
    }

    #[test]
    fn add_box_invalidates_table() {
        let mut tf = TransferFunction2D::new();
        tf.generate(2, 2);
        assert!(tf.table().is_some());
        tf.add_box(0.0, 1.0, 0.0, 1.0, white(), 1.0);
        assert!(tf.table().is_none());
    }
}
