use crate::color::RGB;

/// Anchor of a piecewise-linear function over density `[0;1]`.
pub trait ControlPoint: Copy {
    type Value: Copy;

    fn position(&self) -> f32;

    fn value(&self) -> Self::Value;

    fn lerp(from: Self::Value, to: Self::Value, t: f32) -> Self::Value;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint {
    pub position: f32,
    pub color: RGB,
}

impl ColorPoint {
    pub fn new(position: f32, color: RGB) -> ColorPoint {
        ColorPoint {
            position: clamp_unit(position),
            color,
        }
    }
}

impl ControlPoint for ColorPoint {
    type Value = RGB;

    fn position(&self) -> f32 {
        self.position
    }

    fn value(&self) -> RGB {
        self.color
    }

    fn lerp(from: RGB, to: RGB, t: f32) -> RGB {
        from + (to - from) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaPoint {
    pub position: f32,
    pub alpha: f32,
}

impl AlphaPoint {
    pub fn new(position: f32, alpha: f32) -> AlphaPoint {
        AlphaPoint {
            position: clamp_unit(position),
            alpha: clamp_unit(alpha),
        }
    }
}

impl ControlPoint for AlphaPoint {
    type Value = f32;

    fn position(&self) -> f32 {
        self.position
    }

    fn value(&self) -> f32 {
        self.alpha
    }

    fn lerp(from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * t
    }
}

/// NaN maps to 0.
pub(crate) fn clamp_unit(val: f32) -> f32 {
    if val.is_nan() {
        0.0
    } else {
        val.clamp(0.0, 1.0)
    }
}

/// Insert keeping points ordered by position.
/// A point lands after all points sharing its position.
pub(crate) fn insert_sorted<P: ControlPoint>(points: &mut Vec<P>, point: P) {
    let at = points.partition_point(|p| p.position() <= point.position());
    points.insert(at, point);
}

/// Piecewise-linear evaluation, edge values outside the covered interval.
///
/// At a position shared by several points, the last inserted one is used.
pub(crate) fn evaluate<P: ControlPoint>(points: &[P], pos: f32) -> Option<P::Value> {
    let first = points.first()?;
    let upper = points.partition_point(|p| p.position() <= pos);

    if upper == 0 {
        return Some(first.value());
    }
    let low = &points[upper - 1];
    let high = match points.get(upper) {
        Some(high) => high,
        None => return Some(low.value()),
    };

    // high.position > pos >= low.position, no zero division
    let t = (pos - low.position()) / (high.position() - low.position());
    Some(P::lerp(low.value(), high.value(), t))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color;

    fn alphas(points: &[(f32, f32)]) -> Vec<AlphaPoint> {
        let mut v = Vec::new();
        for &(p, a) in points {
            insert_sorted(&mut v, AlphaPoint::new(p, a));
        }
        v
    }

    #[test]
    fn insertion_keeps_order() {
        let points = alphas(&[(0.5, 0.1), (0.0, 0.2), (1.0, 0.3), (0.25, 0.4)]);
        let positions: Vec<_> = points.iter().map(|p| p.position).collect();
        assert_eq!(positions, [0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn exact_knot_value() {
        let points = alphas(&[(0.0, 0.0), (0.3, 0.7), (1.0, 0.2)]);
        assert_eq!(evaluate(&points, 0.3), Some(0.7));
        assert_eq!(evaluate(&points, 1.0), Some(0.2));
        assert_eq!(evaluate(&points, 0.0), Some(0.0));
    }

    #[test]
    fn outside_range_uses_edges() {
        let points = alphas(&[(0.2, 0.4), (0.6, 0.8)]);
        assert_eq!(evaluate(&points, 0.0), Some(0.4));
        assert_eq!(evaluate(&points, 0.9), Some(0.8));
    }

    #[test]
    fn duplicate_position_last_wins() {
        let points = alphas(&[(0.0, 0.0), (0.5, 0.2), (0.5, 0.9), (1.0, 1.0)]);
        assert_eq!(evaluate(&points, 0.5), Some(0.9));
        // left of the duplicate interpolates towards the first inserted point
        let left = evaluate(&points, 0.25).unwrap();
        assert!((left - 0.1).abs() < 1e-6);
        let right = evaluate(&points, 0.75).unwrap();
        assert!((right - 0.95).abs() < 1e-6);
    }

    #[test]
    fn empty_has_no_value() {
        let points: Vec<AlphaPoint> = Vec::new();
        assert_eq!(evaluate(&points, 0.5), None);
    }

    #[test]
    fn color_interpolation() {
        let mut points = Vec::new();
        insert_sorted(&mut points, ColorPoint::new(0.0, color::rgb(0.0, 1.0, 0.2)));
        insert_sorted(&mut points, ColorPoint::new(1.0, color::rgb(1.0, 0.0, 0.2)));

        let mid = evaluate(&points, 0.25).unwrap();
        assert!((mid.x - 0.25).abs() < 1e-6);
        assert!((mid.y - 0.75).abs() < 1e-6);
        assert!((mid.z - 0.2).abs() < 1e-6);
    }

    #[test]
    fn positions_are_clamped() {
        assert_eq!(AlphaPoint::new(-0.5, 2.0), AlphaPoint { position: 0.0, alpha: 1.0 });
        assert_eq!(AlphaPoint::new(f32::NAN, 0.5).position, 0.0);
    }
}
