//! File-backed [`ByteSource`].

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::ByteSource;
use crate::error::WindowError;

/// A byte source reading from a file opened by path.
#[derive(Debug)]
pub struct FileSource {
    file: Option<File>,
    path: PathBuf,
}

impl FileSource {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::SourceUnavailable`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WindowError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WindowError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "opened file source");

        Ok(Self {
            file: Some(file),
            path: path.to_path_buf(),
        })
    }

    /// Returns the path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file size in bytes, if the file is still open.
    pub fn file_len(&self) -> Option<u64> {
        self.file
            .as_ref()
            .and_then(|f| f.metadata().ok())
            .map(|m| m.len())
    }
}

impl ByteSource for FileSource {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(file) => file.read(buf),
            None => Ok(0),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        if self.file.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file source");
        }
        Ok(())
    }
}
