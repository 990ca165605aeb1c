use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};

use crate::error::Result;

/// Bytes of a raw volume, owned or memory mapped.
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    /// Map file into memory, read only.
    pub fn from_file<P>(path: P) -> Result<DataSource>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path.as_ref())?;

        // Zero length mappings are rejected by the OS
        if file.metadata()?.len() == 0 {
            return Ok(DataSource::Vec(Vec::new()));
        }

        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(DataSource::Mmap(mmap))
    }

    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn len(&self) -> usize {
        self.get_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            DataSource::Vec(_) => "Vec",
            DataSource::Mmap(_) => "Mmap",
        };
        f.debug_struct("DataSource")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

impl From<Vec<u8>> for DataSource {
    fn from(vec: Vec<u8>) -> Self {
        DataSource::Vec(vec)
    }
}
