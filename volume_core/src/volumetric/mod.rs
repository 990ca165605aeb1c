//! Raw volume input: encodings, import configuration, decoding and the
//! resulting dataset.

mod config;
mod data_source;
mod dataset;
mod decoder;
mod format;

pub use config::ImportConfig;
pub use data_source::DataSource;
pub use dataset::VolumeDataset;
pub use decoder::{decode, decode_slice, decode_source, import_file};
pub use format::SampleFormat;
