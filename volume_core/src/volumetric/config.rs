use std::mem::size_of;

use nalgebra::Vector3;

use super::SampleFormat;
use crate::error::{ImportError, Result};

/// Everything needed to decode a headerless raw volume.
///
/// Dimensions and encoding are not stored in the file, the caller supplies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    /// Extents of the voxel grid
    pub dims: Vector3<usize>,
    /// Bytes discarded before the first sample
    pub skip_bytes: usize,
    /// Encoding of samples
    pub format: SampleFormat,
}

impl ImportConfig {
    pub fn new(dims: Vector3<usize>, format: SampleFormat) -> ImportConfig {
        ImportConfig {
            dims,
            skip_bytes: 0,
            format,
        }
    }

    #[must_use]
    pub fn with_skip_bytes(mut self, skip_bytes: usize) -> ImportConfig {
        self.skip_bytes = skip_bytes;
        self
    }

    /// Rejects zero extents and voxel counts that cannot be held in memory.
    pub fn validate(&self) -> Result<()> {
        self.byte_len().map(|_| ())
    }

    /// Number of samples, `x * y * z`.
    pub fn sample_count(&self) -> Result<usize> {
        if self.dims.iter().any(|&d| d == 0) {
            return Err(self.invalid_dims());
        }
        let count = self
            .dims
            .iter()
            .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| self.invalid_dims())?;
        // decoded samples are stored as i64
        count
            .checked_mul(size_of::<i64>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| self.invalid_dims())?;
        Ok(count)
    }

    /// Length of a complete input, header included.
    pub fn byte_len(&self) -> Result<usize> {
        self.sample_count()?
            .checked_mul(self.format.byte_width())
            .and_then(|len| len.checked_add(self.skip_bytes))
            .ok_or_else(|| self.invalid_dims())
    }

    fn invalid_dims(&self) -> ImportError {
        ImportError::InvalidDimensions {
            x: self.dims.x,
            y: self.dims.y,
            z: self.dims.z,
        }
    }

    /// Parse `key:value` descriptor text, see [`crate::premade::parse::descriptor_parser`].
    pub fn from_descriptor(text: &str) -> Result<ImportConfig> {
        crate::premade::parse::descriptor_parser(text)
    }

    /// Descriptor text understood by [`ImportConfig::from_descriptor`].
    pub fn to_descriptor(&self) -> String {
        format!(
            "dimx:{}\ndimy:{}\ndimz:{}\nskip:{}\nformat:{}\n",
            self.dims.x, self.dims.y, self.dims.z, self.skip_bytes, self.format
        )
    }
}
