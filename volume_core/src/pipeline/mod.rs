//! Import pipeline
//!
//! Explicit steps, each callable on its own:
//! decode -> classify -> build transfer functions -> publish.

mod handoff;
mod import_thread;

pub use handoff::{ArtifactSink, ExternalHandles, ExternalTextures, NOISE_TEXTURE_SIZE};
pub use import_thread::{spawn_import, spawn_import_file, ImportHandle};

use std::path::Path;

use crate::{
    classify::{self, VoxelColorBuffer},
    error::Result,
    premade::transfer_functions::{ct_default, default_2d},
    transfer_function::{
        Tf2dTable, TfTable, TransferFunction, TransferFunction2D, TF2D_TABLE_SIZE, TF_TABLE_WIDTH,
    },
    volumetric::{self, DataSource, ImportConfig, VolumeDataset},
};

/// Owns a decoded dataset and everything derived from it.
#[derive(Debug)]
pub struct Pipeline {
    dataset: VolumeDataset,
    voxels: Option<VoxelColorBuffer>,
    transfer_function: TransferFunction,
    transfer_function_2d: TransferFunction2D,
}

impl Pipeline {
    /// Start from a decoded dataset, with the default CT transfer functions.
    pub fn new(dataset: VolumeDataset) -> Pipeline {
        Pipeline {
            dataset,
            voxels: None,
            transfer_function: ct_default(),
            transfer_function_2d: default_2d(),
        }
    }

    pub fn import(source: &DataSource, config: &ImportConfig) -> Result<Pipeline> {
        let dataset = volumetric::decode_source(source, config)?;
        Ok(Pipeline::new(dataset))
    }

    pub fn import_file<P>(path: P, config: &ImportConfig) -> Result<Pipeline>
    where
        P: AsRef<Path>,
    {
        let dataset = volumetric::import_file(path, config)?;
        Ok(Pipeline::new(dataset))
    }

    pub fn dataset(&self) -> &VolumeDataset {
        &self.dataset
    }

    /// Classify the dataset, cached after the first call.
    pub fn classify(&mut self) -> &VoxelColorBuffer {
        let dataset = &self.dataset;
        self.voxels.get_or_insert_with(|| classify::classify(dataset))
    }

    pub fn voxels(&self) -> Option<&VoxelColorBuffer> {
        self.voxels.as_ref()
    }

    pub fn transfer_function(&self) -> &TransferFunction {
        &self.transfer_function
    }

    pub fn transfer_function_mut(&mut self) -> &mut TransferFunction {
        &mut self.transfer_function
    }

    pub fn set_transfer_function(&mut self, tf: TransferFunction) {
        self.transfer_function = tf;
    }

    pub fn transfer_function_2d(&self) -> &TransferFunction2D {
        &self.transfer_function_2d
    }

    pub fn transfer_function_2d_mut(&mut self) -> &mut TransferFunction2D {
        &mut self.transfer_function_2d
    }

    pub fn set_transfer_function_2d(&mut self, tf: TransferFunction2D) {
        self.transfer_function_2d = tf;
    }

    /// Regenerate both lookup tables at default resolution.
    pub fn build_transfer_functions(&mut self) -> (&TfTable, &Tf2dTable) {
        let table = self.transfer_function.generate(TF_TABLE_WIDTH);
        let table_2d = self
            .transfer_function_2d
            .generate(TF2D_TABLE_SIZE, TF2D_TABLE_SIZE);
        (table, table_2d)
    }

    /// Push every artifact to the host, building missing ones first.
    pub fn publish<S, E>(&mut self, sink: &mut S, externals: &E) -> ExternalHandles<E::Handle>
    where
        S: ArtifactSink,
        E: ExternalTextures,
    {
        let dims = self.dataset.dims();
        let voxels = self.classify();
        sink.volume(dims, voxels);

        if self.transfer_function.table().is_none() {
            self.transfer_function.generate(TF_TABLE_WIDTH);
        }
        if let Some(table) = self.transfer_function.table() {
            sink.transfer_function(table);
        }

        if self.transfer_function_2d.table().is_none() {
            self.transfer_function_2d
                .generate(TF2D_TABLE_SIZE, TF2D_TABLE_SIZE);
        }
        if let Some(table) = self.transfer_function_2d.table() {
            sink.transfer_function_2d(table);
        }

        ExternalHandles {
            histogram: externals.histogram(&self.dataset),
            noise: externals.noise(NOISE_TEXTURE_SIZE, NOISE_TEXTURE_SIZE),
        }
    }
}
