//! Iterator over rolled-in bytes.

use std::iter::FusedIterator;

use super::window::WindowBuffer;
use crate::error::WindowError;
use crate::source::ByteSource;

/// An iterator that yields each byte rolling into the window.
///
/// Created by [`WindowBuffer::rolled`]. Each item is one
/// [`get_next`](WindowBuffer::get_next) call. The iterator ends when the
/// stream is exhausted, and after yielding the first error.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use rollbuf::{WindowBuffer, WindowConfig};
///
/// let config = WindowConfig::new(16, 4)?;
/// let mut buf = WindowBuffer::from_reader(Cursor::new(b"abcdefg".to_vec()), config)?;
///
/// let first = buf.get_window()?.expect("window").to_vec();
/// let rest = buf.rolled().collect::<Result<Vec<u8>, _>>()?;
/// assert_eq!(first, b"abcd");
/// assert_eq!(rest, b"efg");
/// # Ok::<(), rollbuf::WindowError>(())
/// ```
#[derive(Debug)]
pub struct RolledBytes<'a, S: ByteSource> {
    buffer: &'a mut WindowBuffer<S>,
    finished: bool,
}

impl<'a, S: ByteSource> RolledBytes<'a, S> {
    pub(super) fn new(buffer: &'a mut WindowBuffer<S>) -> Self {
        Self {
            buffer,
            finished: false,
        }
    }
}

impl<S: ByteSource> Iterator for RolledBytes<'_, S> {
    type Item = Result<u8, WindowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.buffer.get_next() {
            Ok(Some(byte)) => Some(Ok(byte)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: ByteSource> FusedIterator for RolledBytes<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use std::io::{self, Cursor, Read};

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn test_rolled_counts_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        let config = WindowConfig::new(32, 8).unwrap();
        let mut buf = WindowBuffer::from_reader(Cursor::new(data), config).unwrap();

        // without priming, the first item is the last byte of the first window
        let rolled: Vec<u8> = buf.rolled().map(Result::unwrap).collect();
        assert_eq!(rolled.len(), 256 - 8 + 1);
        assert_eq!(rolled[0], 7);
        assert_eq!(*rolled.last().unwrap(), 255);
    }

    #[test]
    fn test_rolled_stops_after_error() {
        let config = WindowConfig::new(8, 4).unwrap();
        let mut buf = WindowBuffer::from_reader(Broken, config).unwrap();

        let mut iter = buf.rolled();
        assert!(matches!(iter.next(), Some(Err(WindowError::Read(_)))));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
