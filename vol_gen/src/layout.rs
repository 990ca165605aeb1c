//! Sample layout of the generated file
//! X grows fastest, then Y, then Z

use nalgebra::{vector, Vector3};

/// Samples in one Z slice.
pub fn slice_len(dims: Vector3<usize>) -> usize {
    dims.x * dims.y
}

/// Coordinates of the `i`-th sample of slice `z`.
pub fn slice_coords(dims: Vector3<usize>, z: usize, i: usize) -> Vector3<usize> {
    vector![i % dims.x, i / dims.x, z]
}

pub fn linear_index(dims: Vector3<usize>, coords: Vector3<usize>) -> usize {
    coords.x + coords.y * dims.x + coords.z * dims.x * dims.y
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn x_fastest() {
        let dims = vector![2, 3, 4];

        #[rustfmt::skip]
        let expected = [
            vector![0,0,1],vector![1,0,1],
            vector![0,1,1],vector![1,1,1],
            vector![0,2,1],vector![1,2,1],
        ];

        let coords: Vec<_> = (0..slice_len(dims))
            .map(|i| slice_coords(dims, 1, i))
            .collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn index_matches_file_order() {
        let dims = vector![3, 2, 5];
        let mut n = 0;
        for z in 0..dims.z {
            for i in 0..slice_len(dims) {
                assert_eq!(linear_index(dims, slice_coords(dims, z, i)), n);
                n += 1;
            }
        }
        assert_eq!(n, 30);
    }
}
