use std::{ffi::OsString, path::PathBuf, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector3};
use volume_core::volumetric::{ImportConfig, SampleFormat};

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or_else(|| format!("missing {key}"))?
        .map(|v| v.parse::<T>().map_err(|_| format!("cannot parse {key} value {v}")))
        .collect::<Result<Vec<T>, String>>()?;
    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{key} needs exactly 3 values")),
    }
}

fn parse_value<T: FromStr>(args: &ArgMatches, key: &str) -> Result<T, String> {
    let s = args
        .value_of(key)
        .ok_or_else(|| format!("missing argument {key}"))?;
    s.parse()
        .map_err(|_| format!("cannot parse {key} value {s}"))
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<usize>,
    /// Encoding of samples
    pub format: SampleFormat,
    /// Padding written before the samples
    pub skip_bytes: usize,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    // Output file name
    pub file_name: OsString,
    /// Write `<file_name>.ini` next to the volume
    pub descriptor: bool,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config, String> {
        let dims = values_to_vector3(args, "dims")?;
        let format: SampleFormat = parse_value(args, "format")?;
        let skip_bytes = parse_value(args, "skip")?;
        let generator = GeneratorConfig::from_args(args)?;

        let sample = generator.sample();
        let (low, high) = format.limits();
        if !(low..=high).contains(&sample) {
            return Err(format!(
                "sample {sample} does not fit {format} <{low};{high}>"
            ));
        }

        // has default value
        let file_name = args
            .value_of_os("output-file")
            .unwrap_or_default()
            .to_owned();
        let descriptor = args.is_present("descriptor");
        let seed = match args.value_of("seed") {
            Some(_) => Some(parse_value(args, "seed")?),
            None => None,
        };

        let cfg = Config {
            dims,
            format,
            skip_bytes,
            generator,
            file_name,
            descriptor,
            seed,
        };
        cfg.import_config()
            .validate()
            .map_err(|e| e.to_string())?;
        Ok(cfg)
    }

    /// How `volume_core` reads the generated file back.
    pub fn import_config(&self) -> ImportConfig {
        ImportConfig::new(self.dims, self.format).with_skip_bytes(self.skip_bytes)
    }

    pub fn descriptor_path(&self) -> PathBuf {
        let mut name = self.file_name.clone();
        name.push(".ini");
        name.into()
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Generate shapes
    Shapes {
        n_of_shapes: usize,
        sample: i64,
        obj_size: usize,
    },
    /// Uniform noise in `<0;sample>`
    Noise { sample: i64 },
    /// Generate solid volume
    Solid { sample: i64 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name: GeneratorType = parse_value(args, "generator")?;
        let sample = parse_value(args, "sample")?;

        let cfg = match name {
            GeneratorType::Shapes => GeneratorConfig::Shapes {
                n_of_shapes: parse_value(args, "n-of-shapes")?,
                sample,
                obj_size: parse_value(args, "object-size")?,
            },
            GeneratorType::Noise => GeneratorConfig::Noise { sample },
            GeneratorType::Solid => GeneratorConfig::Solid { sample },
        };
        Ok(cfg)
    }

    pub fn sample(&self) -> i64 {
        match *self {
            GeneratorConfig::Shapes { sample, .. }
            | GeneratorConfig::Noise { sample }
            | GeneratorConfig::Solid { sample } => sample,
        }
    }
}

#[derive(Debug)]
pub enum GeneratorType {
    Shapes,
    Noise,
    Solid,
}

impl FromStr for GeneratorType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shapes" => Ok(GeneratorType::Shapes),
            "noise" => Ok(GeneratorType::Noise),
            "solid" => Ok(GeneratorType::Solid),
            _ => Err(()),
        }
    }
}
