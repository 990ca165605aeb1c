use std::{
    path::PathBuf,
    thread::{self, JoinHandle},
};

use crossbeam::channel::{Receiver, TryRecvError};
use tracing::debug;

use crate::{
    error::{ImportError, Result},
    volumetric::{self, DataSource, ImportConfig, VolumeDataset},
};

/// Decoding running on a background thread.
///
/// The only message ever sent is the final result, a partially decoded
/// dataset is never observable.
pub struct ImportHandle {
    receiver: Receiver<Result<VolumeDataset>>,
    handle: Option<JoinHandle<()>>,
}

impl ImportHandle {
    /// Block until decoding finishes.
    pub fn wait(mut self) -> Result<VolumeDataset> {
        let result = self.receiver.recv().map_err(|_| ImportError::Worker);
        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| ImportError::Worker)?;
        }
        result?
    }

    /// Poll for the result. Once taken, the result is gone
    /// and later calls report [`ImportError::Worker`].
    pub fn try_result(&self) -> Option<Result<VolumeDataset>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ImportError::Worker)),
        }
    }
}

/// Decode `source` on a new thread.
/// Invalid configuration is rejected before the thread starts.
pub fn spawn_import(source: DataSource, config: ImportConfig) -> Result<ImportHandle> {
    spawn_with(config, move || volumetric::decode_source(&source, &config))
}

/// Map and decode a file on a new thread.
pub fn spawn_import_file<P>(path: P, config: ImportConfig) -> Result<ImportHandle>
where
    P: Into<PathBuf>,
{
    let path = path.into();
    spawn_with(config, move || volumetric::import_file(&path, &config))
}

fn spawn_with<F>(config: ImportConfig, job: F) -> Result<ImportHandle>
where
    F: FnOnce() -> Result<VolumeDataset> + Send + 'static,
{
    config.validate()?;

    let (sender, receiver) = crossbeam::channel::bounded(1);
    let handle = thread::Builder::new()
        .name("volume-import".into())
        .spawn(move || {
            debug!("import thread started");
            // receiver may be gone, nobody to report to then
            let _ = sender.send(job());
        })?;

    Ok(ImportHandle {
        receiver,
        handle: Some(handle),
    })
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use nalgebra::vector;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::{
        test_helpers::encode_samples,
        volumetric::SampleFormat,
    };

    #[test]
    fn background_import_from_memory() {
        let bytes = encode_samples(SampleFormat::Uint16, &[10, 20, 30, 40]);
        let cfg = ImportConfig::new(vector![2, 2, 1], SampleFormat::Uint16);

        let handle = spawn_import(DataSource::from_vec(bytes), cfg).unwrap();
        let ds = handle.wait().unwrap();

        assert_eq!(ds.samples(), &[10, 20, 30, 40]);
    }

    #[test]
    fn background_import_from_file() {
        let bytes = encode_samples(SampleFormat::Int8, &[-1, 1]);
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        let cfg = ImportConfig::new(vector![2, 1, 1], SampleFormat::Int8);

        let ds = spawn_import_file(file.path(), cfg).unwrap().wait().unwrap();
        assert_eq!(ds.range().width(), 2);
    }

    #[test]
    fn failure_is_reported_without_dataset() {
        let cfg = ImportConfig::new(vector![4, 4, 4], SampleFormat::Uint8);
        let handle = spawn_import(DataSource::from_vec(vec![0; 10]), cfg).unwrap();
        assert!(matches!(
            handle.wait(),
            Err(ImportError::InputExhausted { expected: 64, .. })
        ));
    }

    #[test]
    fn invalid_config_rejected_up_front() {
        let cfg = ImportConfig::new(vector![4, 0, 4], SampleFormat::Uint8);
        let res = spawn_import(DataSource::from_vec(vec![]), cfg);
        assert!(matches!(res, Err(ImportError::InvalidDimensions { .. })));
    }

    #[test]
    fn polling_eventually_yields() {
        let cfg = ImportConfig::new(vector![1, 1, 1], SampleFormat::Uint8);
        let handle = spawn_import(DataSource::from_vec(vec![9]), cfg).unwrap();

        let result = loop {
            if let Some(result) = handle.try_result() {
                break result;
            }
            thread::yield_now();
        };
        assert_eq!(result.unwrap().samples(), &[9]);
    }
}
