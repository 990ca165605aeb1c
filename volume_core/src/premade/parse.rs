//! Dataset descriptor
//!
//! Raw volumes carry no metadata, so they often come with a small text file:
//!
//! ```text
//! dimx:256
//! dimy:256
//! dimz:113
//! skip:0
//! format:uint8
//! ```
//!
//! Keys are case insensitive, unknown keys, blank lines and `#` comments are
//! ignored.

use std::path::Path;

use nalgebra::vector;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::{all_consuming, map},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::{
    error::{ImportError, Result},
    volumetric::{self, ImportConfig, SampleFormat, VolumeDataset},
};

fn key(s: &str) -> IResult<&str, &str> {
    delimited(
        space0,
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        space0,
    )(s)
}

fn value(s: &str) -> IResult<&str, &str> {
    map(take_while1(|_: char| true), str::trim)(s)
}

fn entry(s: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(key, char(':'), value))(s)
}

/// Parse descriptor text into an import configuration.
pub fn descriptor_parser(text: &str) -> Result<ImportConfig> {
    let mut dims: [Option<usize>; 3] = [None; 3];
    let mut skip = 0;
    let mut format = None;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (_, (key, value)) = entry(line).map_err(|_| {
            ImportError::Descriptor(format!("line {}: expected 'key:value'", line_no + 1))
        })?;

        match key.to_ascii_lowercase().as_str() {
            "dimx" => dims[0] = Some(number(value, line_no)?),
            "dimy" => dims[1] = Some(number(value, line_no)?),
            "dimz" => dims[2] = Some(number(value, line_no)?),
            "skip" => skip = number(value, line_no)?,
            "format" => format = Some(value.parse::<SampleFormat>()?),
            _ => (),
        }
    }

    let [x, y, z] = dims;
    let missing = |name: &str| ImportError::Descriptor(format!("missing key '{name}'"));
    let dims = vector![
        x.ok_or_else(|| missing("dimx"))?,
        y.ok_or_else(|| missing("dimy"))?,
        z.ok_or_else(|| missing("dimz"))?
    ];
    let format = format.ok_or_else(|| missing("format"))?;

    Ok(ImportConfig::new(dims, format).with_skip_bytes(skip))
}

fn number(value: &str, line_no: usize) -> Result<usize> {
    value.parse().map_err(|_| {
        ImportError::Descriptor(format!("line {}: '{value}' is not a number", line_no + 1))
    })
}

// Common pattern
/// Import a raw volume described by a descriptor file.
pub fn from_file<P, D>(raw: P, descriptor: D) -> Result<VolumeDataset>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let text = std::fs::read_to_string(descriptor)?;
    let config = descriptor_parser(&text)?;
    volumetric::import_file(raw, &config)
}
