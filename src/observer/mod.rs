//! Optional diagnostic sink.
//!
//! A window buffer reports what it does to an injected [`Observer`]. The
//! observer is purely observational; a buffer behaves identically with or
//! without one.

/// Something the window buffer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The staging array was compacted and/or refilled from the source.
    Refilled {
        /// Bytes dropped from the front of the staging array by compaction.
        compacted: usize,
        /// Fresh bytes read from the source.
        read: usize,
        /// Staged bytes after the refill.
        fill_level: usize,
    },
    /// The source reported exhaustion.
    Exhausted {
        /// Bytes still staged when exhaustion was seen.
        staged: usize,
        /// The window width from now on.
        window_size: usize,
    },
    /// The source was released.
    Released,
    /// A read failed; the buffer is now closed.
    ReadFailed,
}

/// Receives [`Event`]s from a window buffer.
///
/// Implemented for every `FnMut(&Event)`. Observers are owned by the buffer,
/// so they must be `Send + 'static`:
///
/// ```
/// use std::io::Cursor;
/// use std::sync::{Arc, Mutex};
/// use rollbuf::{Event, WindowBuffer, WindowConfig};
///
/// let events = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&events);
///
/// let config = WindowConfig::new(8, 4)?;
/// let mut buf = WindowBuffer::from_reader(Cursor::new(vec![0u8; 6]), config)?
///     .with_observer(move |e: &Event| sink.lock().unwrap().push(*e));
/// while buf.get_next()?.is_some() {}
///
/// assert!(events.lock().unwrap().contains(&Event::Released));
/// # Ok::<(), rollbuf::WindowError>(())
/// ```
pub trait Observer {
    /// Called once per event, synchronously.
    fn on_event(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Observer for F {
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |e: &Event| seen.push(*e);
            observer.on_event(&Event::Released);
            observer.on_event(&Event::ReadFailed);
        }
        assert_eq!(seen, vec![Event::Released, Event::ReadFailed]);
    }
}
