//! Scalar decoder
//!
//! Reads `[skip_bytes][N samples]` in a single pass, tracking the sample range
//! as it goes. Truncated input is an error, nothing is zero-filled.

use std::{
    io::{self, BufReader, ErrorKind, Read},
    path::Path,
    time::Instant,
};

use tracing::{debug, info};

use super::{DataSource, ImportConfig, VolumeDataset};
use crate::{
    common::SampleRange,
    error::{ImportError, Result},
};

/// Decode a complete dataset from a byte stream.
pub fn decode<R: Read>(reader: R, config: &ImportConfig) -> Result<VolumeDataset> {
    let count = config.sample_count()?;
    let start = Instant::now();

    let mut samples: Vec<i64> = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| ImportError::InvalidDimensions {
            x: config.dims.x,
            y: config.dims.y,
            z: config.dims.z,
        })?;

    let mut reader = BufReader::new(reader);

    skip_header(&mut reader, config.skip_bytes, count)?;

    let format = config.format;
    let mut range = SampleRange::empty();
    for decoded in 0..count {
        let val = match format.read_sample(&mut reader) {
            Ok(val) => val,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(ImportError::InputExhausted {
                    decoded,
                    expected: count,
                })
            }
            Err(e) => return Err(e.into()),
        };
        range.extend(val);
        samples.push(val);
    }

    info!(
        dims = ?config.dims,
        format = %format,
        min = range.min,
        max = range.max,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "decoded volume"
    );

    Ok(VolumeDataset::from_parts(config.dims, samples, range))
}

/// Decode from memory. Short input is rejected before decoding starts.
pub fn decode_slice(bytes: &[u8], config: &ImportConfig) -> Result<VolumeDataset> {
    let needed = config.byte_len()?;
    if bytes.len() < needed {
        let available = bytes.len().saturating_sub(config.skip_bytes) / config.format.byte_width();
        return Err(ImportError::InputExhausted {
            decoded: available,
            expected: config.sample_count()?,
        });
    }
    decode(bytes, config)
}

pub fn decode_source(source: &DataSource, config: &ImportConfig) -> Result<VolumeDataset> {
    decode_slice(source.get_slice(), config)
}

/// Map the file and decode it. The config is validated before the file is touched.
pub fn import_file<P>(path: P, config: &ImportConfig) -> Result<VolumeDataset>
where
    P: AsRef<Path>,
{
    config.validate()?;
    let source = DataSource::from_file(path)?;
    decode_source(&source, config)
}

fn skip_header<R: Read>(reader: &mut R, skip: usize, expected: usize) -> Result<()> {
    if skip == 0 {
        return Ok(());
    }
    let skipped = io::copy(&mut reader.by_ref().take(skip as u64), &mut io::sink())?;
    debug!(skipped, "header skipped");
    if skipped < skip as u64 {
        return Err(ImportError::InputExhausted {
            decoded: 0,
            expected,
        });
    }
    Ok(())
}
