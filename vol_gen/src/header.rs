use std::io::{self, Write};

use crate::config::Config;

/// Filler of the padding.
pub const PADDING_BYTE: u8 = 0xAB;

/// Bytes preceding the first sample.
/// The readers skip them without interpretation.
pub fn generate_header(cfg: &Config) -> Vec<u8> {
    vec![PADDING_BYTE; cfg.skip_bytes]
}

pub fn write_header<W: Write>(writer: &mut W, cfg: &Config) -> io::Result<()> {
    writer.write_all(&generate_header(cfg))
}

/// Descriptor text for the generated file.
pub fn generate_descriptor(cfg: &Config) -> String {
    cfg.import_config().to_descriptor()
}
