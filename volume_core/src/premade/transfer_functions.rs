use crate::{
    color,
    transfer_function::{TransferFunction, TransferFunction2D},
};

// Bone and soft tissue of CT scans, densities normalized to <0;1>
pub fn ct_default() -> TransferFunction {
    let mut tf = TransferFunction::new();
    tf.add_color_point(0.0, color::rgb(0.11, 0.14, 0.13));
    tf.add_color_point(0.2415, color::rgb(0.469, 0.354, 0.223));
    tf.add_color_point(0.3253, color::rgb(1.0, 1.0, 1.0));

    tf.add_alpha_point(0.0, 0.0);
    tf.add_alpha_point(0.1787, 0.0);
    tf.add_alpha_point(0.2, 0.024);
    tf.add_alpha_point(0.28, 0.03);
    tf.add_alpha_point(0.4, 0.546);
    tf.add_alpha_point(0.547, 0.5266);
    tf
}

// Black to white, opacity grows with density
pub fn grayscale_ramp() -> TransferFunction {
    let mut tf = TransferFunction::new();
    tf.add_color_point(0.0, color::rgb(0.0, 0.0, 0.0));
    tf.add_color_point(1.0, color::rgb(1.0, 1.0, 1.0));
    tf.add_alpha_point(0.0, 0.0);
    tf.add_alpha_point(1.0, 1.0);
    tf
}

// One white box over mid densities with strong gradients
pub fn default_2d() -> TransferFunction2D {
    let mut tf = TransferFunction2D::new();
    tf.add_box(0.05, 0.85, 0.1, 0.8, color::rgb(1.0, 1.0, 1.0), 0.4);
    tf
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ct_points_sorted() {
        let tf = ct_default();
        assert_eq!(tf.color_points().len(), 3);
        assert_eq!(tf.alpha_points().len(), 6);
        assert!(tf
            .alpha_points()
            .windows(2)
            .all(|w| w[0].position <= w[1].position));
    }

    #[test]
    fn ct_is_transparent_for_air() {
        let tf = ct_default();
        assert_eq!(tf.sample(0.1).w, 0.0);
        assert!(tf.sample(0.45).w > 0.5);
    }

    #[test]
    fn default_2d_box() {
        let tf = default_2d();
        assert_eq!(tf.boxes().len(), 1);
        assert_eq!(tf.sample(0.5, 0.5), color::new(1.0, 1.0, 1.0, 0.4));
        assert_eq!(tf.sample(0.9, 0.5), color::zero());
    }
}
