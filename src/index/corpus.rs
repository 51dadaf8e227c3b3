//! Corpus storage
//!
//! The text is either memory-mapped straight from disk or held in an owned
//! buffer. Both are read-only once constructed, so a `Corpus` can be shared
//! freely across query threads.

use super::types::{IndexError, MAX_CORPUS_SIZE};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

enum Storage {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Raw bytes of the loaded text
pub struct Corpus {
    storage: Storage,
    source: Option<PathBuf>,
}

impl Corpus {
    /// Map a file into memory.
    ///
    /// Empty files are held as an empty owned buffer since zero-length
    /// mappings are not portable.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        let io_err = |source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        check_size(len)?;

        let storage = if len == 0 {
            Storage::Owned(Vec::new())
        } else {
            // SAFETY: the corpus file is treated as immutable for the life of
            // the process; nothing in this crate writes to it.
            let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
            Storage::Mapped(mmap)
        };

        Ok(Self {
            storage,
            source: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory buffer
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, IndexError> {
        check_size(bytes.len() as u64)?;
        Ok(Self {
            storage: Storage::Owned(bytes),
            source: None,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Mapped(mmap) => &mmap[..],
            Storage::Owned(buf) => &buf[..],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.storage, Storage::Mapped(_))
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn check_size(size: u64) -> Result<(), IndexError> {
    if size > MAX_CORPUS_SIZE {
        return Err(IndexError::CorpusTooLarge { size });
    }
    Ok(())
}
