//! Volume import core
//!
//! Decodes headerless raw scalar volumes and derives what a volume renderer
//! needs from them: a per-voxel RGBA buffer (gradient + density) and transfer
//! function lookup tables.
//!
//! ```no_run
//! use nalgebra::vector;
//! use volume_core::{
//!     pipeline::Pipeline,
//!     volumetric::{ImportConfig, SampleFormat},
//! };
//!
//! let config = ImportConfig::new(vector![256, 256, 113], SampleFormat::Uint16);
//! let mut pipeline = Pipeline::import_file("volumes/head.raw", &config).unwrap();
//! let voxels = pipeline.classify();
//! assert_eq!(voxels.len(), 256 * 256 * 113);
//! ```

pub mod classify;
pub mod color;
pub mod common;
pub mod error;
pub mod pipeline;
pub mod premade;
pub mod test_helpers;
pub mod transfer_function;
pub mod volumetric;

pub use error::{ImportError, Result};
