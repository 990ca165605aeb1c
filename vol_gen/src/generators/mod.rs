use std::{error::Error, fs, io::BufWriter, io::Write};

use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::info;

use crate::{
    config::{Config, GeneratorConfig},
    file::open_create_file,
    header::{generate_descriptor, write_header},
    layout::{slice_coords, slice_len},
};

mod noise;
mod shapes;
mod solid;

// Generates one sample at a time, at any location
// Queried from many threads at once
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<usize>) -> i64;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Shapes {
            n_of_shapes,
            sample,
            obj_size,
        } => Box::new(shapes::ShapesGenerator::new(
            config,
            n_of_shapes,
            sample,
            obj_size,
        )),
        GeneratorConfig::Noise { .. } => Box::new(noise::NoiseGenerator::from_config(config)),
        GeneratorConfig::Solid { .. } => Box::new(solid::SolidGenerator::from_config(config)),
    }
}

/// Write padding and all samples, slice by slice.
/// `on_slice` is called after every finished Z slice.
pub fn write_volume<W, F>(
    writer: &mut W,
    sg: &dyn SampleGenerator,
    config: &Config,
    mut on_slice: F,
) -> std::io::Result<()>
where
    W: Write,
    F: FnMut(),
{
    write_header(writer, config)?;

    let dims = config.dims;
    let mut slice = Vec::with_capacity(slice_len(dims));
    for z in 0..dims.z {
        (0..slice_len(dims))
            .into_par_iter()
            .map(|i| sg.sample_at(slice_coords(dims, z, i)))
            .collect_into_vec(&mut slice);

        for &sample in &slice {
            config.format.write_sample(writer, sample)?;
        }
        on_slice();
    }

    Ok(())
}

pub fn generate_vol(config: &Config) -> Result<(), Box<dyn Error>> {
    let gen = get_sample_generator(config);

    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);

    let progress = ProgressBar::new(config.dims.z as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{elapsed_precise} [{bar:40}] {pos}/{len} slices"),
    );

    write_volume(&mut writer, gen.as_ref(), config, || progress.inc(1))?;
    writer.flush()?;
    progress.finish_and_clear();

    if config.descriptor {
        let path = config.descriptor_path();
        fs::write(&path, generate_descriptor(config))?;
        info!("Descriptor written to {path:?}");
    }

    Ok(())
}
