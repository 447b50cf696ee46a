//! File-backed stream facade.
//!
//! Binds a path to a [`WindowBuffer`]. Opening the file is the only failure
//! this layer adds; it happens before the staging array is allocated.
//!
//! # Example
//!
//! ```no_run
//! use rollbuf::WindowConfig;
//!
//! let mut buf = rollbuf::open("data.bin", WindowConfig::new(1024, 16)?)?;
//! if let Some(window) = buf.get_window()? {
//!     println!("first window: {:02x?}", window);
//! }
//! let mut rolled = 0;
//! while buf.get_next()?.is_some() {
//!     rolled += 1;
//! }
//! println!("{} bytes rolled", rolled);
//! buf.close()?;
//! # Ok::<(), rollbuf::WindowError>(())
//! ```

use std::path::Path;

use crate::buffer::WindowBuffer;
use crate::config::WindowConfig;
use crate::error::Result;
use crate::source::FileSource;

/// A window buffer reading from a file.
pub type FileWindowBuffer = WindowBuffer<FileSource>;

/// Opens `path` and binds it to a new window buffer.
///
/// The configuration is validated first, so an invalid config never touches
/// the filesystem.
///
/// # Errors
///
/// - [`WindowError::InvalidConfig`](crate::WindowError::InvalidConfig) for a zero size
/// - [`WindowError::SourceUnavailable`](crate::WindowError::SourceUnavailable) if the
///   file cannot be opened
pub fn open(path: impl AsRef<Path>, config: WindowConfig) -> Result<FileWindowBuffer> {
    config.validate()?;
    let source = FileSource::open(path)?;
    WindowBuffer::new(source, config)
}

impl WindowBuffer<FileSource> {
    /// Opens `path` and binds it to a new window buffer. See [`open`].
    pub fn open(path: impl AsRef<Path>, config: WindowConfig) -> Result<Self> {
        open(path, config)
    }
}
