//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};
use volume_core::volumetric::SampleFormat;

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_number(num: &str) -> Result<(), String> {
    num.parse::<usize>()
        .map(|_| ())
        .map_err(|_| "Non-negative number required".into())
}

pub fn is_sample(num: &str) -> Result<(), String> {
    num.parse::<i64>()
        .map(|_| ())
        .map_err(|_| "Integer sample value required".into())
}

const GENERATOR_NAMES: &[&str] = &["shapes", "noise", "solid"];
const FORMAT_NAMES: &[&str] = &["int8", "uint8", "int16", "uint16", "int32", "uint32"];

pub fn get_command<'a>() -> Command<'a> {
    debug_assert!(FORMAT_NAMES
        .iter()
        .zip(SampleFormat::ALL)
        .all(|(name, format)| *name == format.name()));

    Command::new("Vol-gen")
        .version("0.1.0")
        .about("Raw volume generator, writes headerless little-endian samples")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("format")
                .help("Encoding of samples")
                .long("format")
                .short('f')
                .default_value("uint8")
                .value_name("FORMAT")
                .possible_values(FORMAT_NAMES),
        )
        .arg(
            Arg::new("skip")
                .help("Bytes of padding before the first sample")
                .long("skip")
                .value_name("BYTES")
                .default_value("0")
                .validator(is_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .requires_ifs(&[
                    ("solid", "sample"), // if solid is set, require option sample
                    ("shapes", "n-of-shapes"),
                    ("shapes", "sample"),
                    ("shapes", "object-size"),
                    ("noise", "sample"),
                ])
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated object, upper bound for noise")
                .long("sample")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .validator(is_sample),
        )
        .arg(
            Arg::new("object-size")
                .help("Size of individual generated objects")
                .long("object-size")
                .value_name("SIDE")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("n-of-shapes")
                .help("Number of shapes generated in volume")
                .long("n-of-shapes")
                .value_name("N")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("output-file")
                .help("File name to output")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("a.raw")),
        )
        .arg(
            Arg::new("descriptor")
                .help("Also write a `<FILE>.ini` descriptor")
                .long("descriptor"),
        )
}
