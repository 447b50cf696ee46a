//! [`ByteSource`] adapter over [`std::io::Read`].

use std::io::{self, Read};

use super::ByteSource;

/// Binds any [`Read`] implementation (cursors, sockets, pipes) as a byte source.
///
/// Closing drops the reader; later reads report exhaustion.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use rollbuf::{ByteSource, ReaderSource};
///
/// let mut source = ReaderSource::new(Cursor::new(b"abc".to_vec()));
/// let mut buf = [0u8; 8];
/// assert_eq!(source.read_into(&mut buf)?, 3);
/// source.close()?;
/// assert_eq!(source.read_into(&mut buf)?, 0);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: Option<R>,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// Returns a reference to the reader, unless it was already released.
    pub fn get_ref(&self) -> Option<&R> {
        self.reader.as_ref()
    }

    /// Returns true once [`close`](ByteSource::close) has released the reader.
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reader.as_mut() {
            Some(reader) => reader.read(buf),
            None => Ok(0),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.reader = None;
        Ok(())
    }
}
