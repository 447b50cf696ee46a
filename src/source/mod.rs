//! Byte sources a window buffer can be bound to.
//!
//! The buffer only needs two capabilities from its source: fill a region with
//! fresh bytes, and release itself once. Any medium offering both can be
//! plugged in.
//!
//! - [`ByteSource`] - The capability pair
//! - [`ReaderSource`] - Adapter for any [`std::io::Read`]
//! - [`FileSource`] - File opened from a path

mod file;
mod reader;

pub use file::FileSource;
pub use reader::ReaderSource;

use std::io;

/// A blocking source of bytes.
pub trait ByteSource {
    /// Reads up to `buf.len()` fresh bytes into `buf`.
    ///
    /// Returns the number of bytes read. `Ok(0)` for a non-empty `buf` means
    /// the source is exhausted. A short read is not exhaustion.
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Releases the source.
    ///
    /// The window buffer calls this at most once per source.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_into(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
