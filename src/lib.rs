//! rollbuf
//!
//! Memory-bounded streaming sliding-window buffer for rolling hashes.
//!
//! `rollbuf` exposes an arbitrarily large byte stream as a window of exactly
//! `window_size` bytes that rolls forward one byte per pull, while holding at
//! most `capacity` bytes in memory. It is the feeding side of:
//!
//! - rolling checksums (rsync-style block matching)
//! - content-defined chunking
//! - fixed-window hashing
//!
//! The crate intentionally:
//! - does NOT compute hashes
//! - does NOT persist or index anything
//! - does NOT synchronize access (one owner drives one buffer)
//!
//! It only does one thing: **Read bytes → yield windows**
//!
//! # Rolling hash
//!
//! ```no_run
//! use rollbuf::{WindowConfig, WindowError};
//!
//! fn main() -> Result<(), WindowError> {
//!     let mut buf = rollbuf::open("data.bin", WindowConfig::new(1024, 16)?)?;
//!
//!     // prime with one full window
//!     let Some(window) = buf.get_window()? else {
//!         return Ok(()); // empty file
//!     };
//!     let mut sum: u32 = window.iter().map(|&b| b as u32).sum();
//!     let mut ring = window.to_vec();
//!
//!     // then roll byte by byte
//!     let mut i = 0;
//!     while let Some(byte) = buf.get_next()? {
//!         sum = sum - ring[i] as u32 + byte as u32;
//!         ring[i] = byte;
//!         i = (i + 1) % ring.len();
//!     }
//!     println!("final sum {}", sum);
//!     Ok(())
//! }
//! ```
//!
//! # Fixed windows
//!
//! ```
//! use std::io::Cursor;
//! use rollbuf::{WindowBuffer, WindowConfig};
//!
//! let mut buf = WindowBuffer::from_reader(Cursor::new(b"abcdef".to_vec()), WindowConfig::new(8, 4)?)?;
//! let mut windows = Vec::new();
//! while let Some(window) = buf.get_window()? {
//!     windows.push(window.to_vec());
//! }
//! assert_eq!(windows, [b"abcd".to_vec(), b"bcde".to_vec(), b"cdef".to_vec()]);
//! # Ok::<(), rollbuf::WindowError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod observer;
mod source;
mod stream;

//
// Public surface
//

pub use buffer::{BufferState, RolledBytes, WindowBuffer};
pub use config::{DEFAULT_CAPACITY, DEFAULT_WINDOW_SIZE, WindowConfig};
pub use error::{Result, WindowError};
pub use observer::{Event, Observer};
pub use source::{ByteSource, FileSource, ReaderSource};
pub use stream::{FileWindowBuffer, open};
