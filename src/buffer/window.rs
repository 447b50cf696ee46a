//! The window buffer core.
//!
//! A fixed-capacity staging array holds bytes read from a [`ByteSource`].
//! The exposed window is `data[pointer..pointer + window_size]`; every pull
//! rolls it forward by one byte. When the window would run past the staged
//! bytes, the live region `data[pointer..fill_level]` is compacted to the
//! front of the array and the free tail is refilled from the source.
//!
//! ```text
//!  before refill:
//!  |.......wwwwwwwww|
//!          |        |fill_level == capacity
//!          |pointer
//!
//!  after compaction + read:
//!  |wwwwwwwwwnnnnnnn|
//!   |               |fill_level
//!   |pointer
//! ```

use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;
use tracing::{debug, trace, warn};

use super::iter::RolledBytes;
use super::state::BufferState;
use crate::config::WindowConfig;
use crate::error::{Result, WindowError};
use crate::observer::{Event, Observer};
use crate::source::{ByteSource, ReaderSource};

/// A memory-bounded sliding window over a byte source.
///
/// `WindowBuffer` exposes windows of exactly `window_size` bytes and rolls them
/// forward one byte per call, reading from its source only when the staged
/// bytes cannot satisfy the next pull. Memory use is bounded by the configured
/// capacity regardless of the stream length.
///
/// # Exhaustion
///
/// Running out of data is never an error: [`get_window`](Self::get_window)
/// returns `None`, [`get_next`](Self::get_next) returns `None`, and
/// [`skip`](Self::skip) returns a short count. Only genuine I/O failures
/// surface as [`WindowError`].
///
/// # Short streams
///
/// If the source is exhausted before a single full window could be staged,
/// the window permanently shrinks to the bytes available and exactly one
/// short window is served. An empty source serves none.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use rollbuf::{WindowBuffer, WindowConfig};
///
/// let data: Vec<u8> = (0..100).collect();
/// let config = WindowConfig::new(32, 8)?;
/// let mut buf = WindowBuffer::from_reader(Cursor::new(data.clone()), config)?;
///
/// // prime with the first full window, then roll byte by byte
/// let mut seen = buf.get_window()?.expect("non-empty").to_vec();
/// while let Some(byte) = buf.get_next()? {
///     seen.push(byte);
/// }
/// assert_eq!(seen, data);
/// # Ok::<(), rollbuf::WindowError>(())
/// ```
pub struct WindowBuffer<S: ByteSource> {
    // None once released
    source: Option<S>,
    data: Box<[u8]>,
    // start of the next window within `data`
    pointer: usize,
    // one past the last staged byte
    fill_level: usize,
    window_size: usize,
    state: BufferState,
    // stream offset of the next window
    position: u64,
    // release failure seen at exhaustion, reported by the next call without data
    deferred: Option<WindowError>,
    observer: Option<Box<dyn Observer + Send>>,
}

impl<S: ByteSource> WindowBuffer<S> {
    /// Binds `source` to a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfig`] if `config` has a zero size.
    pub fn new(source: S, config: WindowConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            source: Some(source),
            data: vec![0u8; config.capacity()].into_boxed_slice(),
            pointer: 0,
            fill_level: 0,
            window_size: config.window_size(),
            state: BufferState::Open,
            position: 0,
            deferred: None,
            observer: None,
        })
    }

    /// Attaches a diagnostic observer.
    ///
    /// The observer must be `Send` so that the buffer itself stays `Send` and
    /// can be handed to a worker thread together with its source.
    pub fn with_observer(mut self, observer: impl Observer + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Returns the current window and rolls forward by one byte.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. The returned slice
    /// borrows the staging array and is only valid until the next call on this
    /// buffer; use [`get_window_bytes`](Self::get_window_bytes) to keep a copy.
    ///
    /// # Errors
    ///
    /// [`WindowError::Read`] if refilling failed (the buffer is closed
    /// afterwards). If releasing an exhausted source failed, the staged
    /// windows are still served and [`WindowError::Close`] is returned in
    /// place of the first `None`.
    pub fn get_window(&mut self) -> Result<Option<&[u8]>> {
        if !self.window_ready() && !self.refill()? {
            self.take_deferred()?;
            return Ok(None);
        }

        let start = self.pointer;
        self.pointer += 1;
        self.position += 1;
        Ok(Some(&self.data[start..start + self.window_size]))
    }

    /// Like [`get_window`](Self::get_window), but copies the window out.
    pub fn get_window_bytes(&mut self) -> Result<Option<Bytes>> {
        Ok(self.get_window()?.map(Bytes::copy_from_slice))
    }

    /// Rolls the window forward and returns the byte that entered it.
    ///
    /// This is the rightmost byte of the window [`get_window`](Self::get_window)
    /// would have returned. A rolling hash primes itself with one full window,
    /// then feeds every byte from here.
    pub fn get_next(&mut self) -> Result<Option<u8>> {
        Ok(self.get_window()?.and_then(|w| w.last().copied()))
    }

    /// Skips `count` rolls without exposing them.
    ///
    /// Equivalent to `count` discarded [`get_next`](Self::get_next) calls.
    /// Returns how many were skipped, which is less than `count` only if the
    /// stream ran out. A failed release of the exhausted source does not
    /// discard the count; it is reported by the next call that skips nothing,
    /// or by [`close`](Self::close).
    pub fn skip(&mut self, count: usize) -> Result<usize> {
        let mut skipped = 0;

        while skipped < count {
            let rolls = (self.fill_level + 1).saturating_sub(self.pointer + self.window_size);
            if rolls == 0 {
                if !self.refill()? {
                    break;
                }
                continue;
            }

            let step = rolls.min(count - skipped);
            self.pointer += step;
            self.position += step as u64;
            skipped += step;
        }

        trace!(requested = count, skipped, "skip");
        if skipped == 0 && count > 0 {
            self.take_deferred()?;
        }
        Ok(skipped)
    }

    /// Releases the source and closes the buffer.
    ///
    /// Idempotent: closing a closed buffer does nothing. The source is
    /// released at most once, even if that release fails. A release failure
    /// not yet reported by another call is returned here.
    pub fn close(&mut self) -> Result<()> {
        if self.state == BufferState::Closed {
            return self.take_deferred();
        }

        self.clear();
        let released = self.release();
        released.and(self.take_deferred())
    }

    /// Returns an iterator over rolled-in bytes.
    ///
    /// The iterator ends at exhaustion and after the first error.
    pub fn rolled(&mut self) -> RolledBytes<'_, S> {
        RolledBytes::new(self)
    }

    /// Returns the current window width.
    ///
    /// This is the configured width unless a non-empty stream shorter than one
    /// window shrank it. An empty stream keeps the configured width.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the staging array size.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Returns true once the buffer is closed.
    pub fn is_closed(&self) -> bool {
        self.state == BufferState::Closed
    }

    /// Returns the stream offset of the first byte of the next window.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the number of staged bytes from the next window onward.
    pub fn staged(&self) -> usize {
        self.fill_level - self.pointer
    }

    /// Returns the bound source, unless it was already released.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    fn window_ready(&self) -> bool {
        self.pointer + self.window_size <= self.fill_level
    }

    // Compacts, then reads until a full window is staged. Returns whether
    // one is.
    fn refill(&mut self) -> Result<bool> {
        match self.state {
            BufferState::Closed => return Ok(false),
            BufferState::Draining => {
                self.finish();
                return Ok(false);
            }
            BufferState::Open => {}
        }

        let compacted = self.compact();

        let Some(source) = self.source.as_mut() else {
            return Ok(false);
        };

        let mut read = 0;
        let outcome: io::Result<bool> = loop {
            if self.pointer + self.window_size <= self.fill_level
                || self.fill_level == self.data.len()
            {
                break Ok(false);
            }
            match source.read_into(&mut self.data[self.fill_level..]) {
                Ok(0) => break Ok(true),
                Ok(n) => {
                    self.fill_level += n;
                    read += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(e),
            }
        };

        trace!(
            compacted,
            read,
            fill_level = self.fill_level,
            "refilled staging buffer"
        );
        self.emit(Event::Refilled {
            compacted,
            read,
            fill_level: self.fill_level,
        });

        match outcome {
            Ok(false) => {}
            Ok(true) => self.exhaust(),
            Err(e) => {
                self.fail();
                return Err(WindowError::Read(e));
            }
        }

        if self.window_ready() {
            return Ok(true);
        }
        if self.state == BufferState::Draining {
            self.finish();
        }
        Ok(false)
    }

    // Moves the live region to the front. Returns how many bytes were dropped.
    fn compact(&mut self) -> usize {
        let dropped = self.pointer;
        if dropped == 0 {
            return 0;
        }
        self.data.copy_within(dropped..self.fill_level, 0);
        self.fill_level -= dropped;
        self.pointer = 0;
        dropped
    }

    fn exhaust(&mut self) {
        let staged = self.staged();
        // only a stream shorter than one window shrinks it
        if self.position == 0 && staged > 0 && staged < self.window_size {
            self.window_size = staged;
        }
        self.state = BufferState::Draining;

        debug!(staged, window_size = self.window_size, "source exhausted");
        self.emit(Event::Exhausted {
            staged,
            window_size: self.window_size,
        });
        if let Err(e) = self.release() {
            self.deferred = Some(e);
        }
    }

    // Draining -> Closed once the last staged window was served.
    fn finish(&mut self) {
        debug!(position = self.position, "window buffer drained");
        self.clear();
    }

    fn fail(&mut self) {
        self.clear();
        self.emit(Event::ReadFailed);
        if let Err(e) = self.release() {
            warn!(error = %e, "failed to release source after read failure");
        }
    }

    fn clear(&mut self) {
        self.state = BufferState::Closed;
        self.pointer = 0;
        self.fill_level = 0;
    }

    fn release(&mut self) -> Result<()> {
        let Some(mut source) = self.source.take() else {
            return Ok(());
        };
        let result = source.close();
        debug!(ok = result.is_ok(), "released source");
        self.emit(Event::Released);
        result.map_err(WindowError::Close)
    }

    fn take_deferred(&mut self) -> Result<()> {
        match self.deferred.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn emit(&mut self, event: Event) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }
}

impl<R: Read> WindowBuffer<ReaderSource<R>> {
    /// Binds any [`Read`] implementation.
    pub fn from_reader(reader: R, config: WindowConfig) -> Result<Self> {
        Self::new(ReaderSource::new(reader), config)
    }
}

impl<S: ByteSource> Drop for WindowBuffer<S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to release source on drop");
        }
    }
}

impl<S: ByteSource> fmt::Debug for WindowBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowBuffer")
            .field("capacity", &self.data.len())
            .field("pointer", &self.pointer)
            .field("fill_level", &self.fill_level)
            .field("window_size", &self.window_size)
            .field("state", &self.state)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
