//! Error type of the import pipeline.
//!
//! Only decode-time failures are errors. Degenerate data ranges and empty
//! transfer functions are absorbed by the classification step.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// A dimension is zero or the voxel count does not fit in memory.
    #[error("invalid volume dimensions {x}x{y}x{z}")]
    InvalidDimensions { x: usize, y: usize, z: usize },

    /// Stream ended before all samples were read.
    #[error("input exhausted after {decoded} of {expected} samples")]
    InputExhausted { decoded: usize, expected: usize },

    /// Malformed dataset descriptor.
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// Background import thread exited without sending a result.
    #[error("import thread terminated without a result")]
    Worker,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ImportError::InputExhausted {
            decoded: 3,
            expected: 8,
        };
        assert_eq!(err.to_string(), "input exhausted after 3 of 8 samples");

        let err = ImportError::InvalidDimensions { x: 0, y: 4, z: 4 };
        assert!(err.to_string().contains("0x4x4"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ImportError = io.into();
        assert!(matches!(err, ImportError::Io(_)));
    }
}
