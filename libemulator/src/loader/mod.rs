use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::memory::Memory;


#[derive(Debug, Error)]
pub enum LoadError {
    /// The image couldn't be opened or read in full.
    #[error("failed to load image: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where each further image lands in program memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Every image is written from address 0 over the previous one. Bytes past the end of a
    /// shorter image keep what an earlier image put there.
    #[default]
    Overwrite,
    /// Images are placed one after another until program memory is full.
    Append,
}

/// Fills program memory from image files before execution starts.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    mode: LoadMode,
    program: Memory,
    offset: usize,
}

impl ImageLoader {
    pub fn new(mode: LoadMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Reads a whole image file and returns how many of its bytes made it into program memory.
    pub fn load_file<P>(&mut self, path: P) -> Result<usize, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let image = fs::read(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let written = self.load_bytes(&image);
        log::info!(
            "Loaded {} of {} bytes from {}",
            written,
            image.len(),
            path.display()
        );

        Ok(written)
    }

    pub fn load_bytes(&mut self, image: &[u8]) -> usize {
        let offset = match self.mode {
            LoadMode::Overwrite => 0,
            LoadMode::Append => self.offset,
        };

        let written = self.program.write_from(offset, image);
        if written < image.len() {
            log::warn!(
                "Image truncated, {} bytes don't fit into program memory",
                image.len() - written
            );
        }

        self.offset = offset + written;
        written
    }

    pub fn finish(self) -> Memory {
        self.program
    }
}

/// Loads every image in order and returns the resulting program memory.
pub fn load_images<I, P>(paths: I, mode: LoadMode) -> Result<Memory, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut loader = ImageLoader::new(mode);

    for path in paths {
        loader.load_file(path)?;
    }

    Ok(loader.finish())
}
