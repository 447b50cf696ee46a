//! Lifecycle of a window buffer.

use std::fmt;

/// Where a [`WindowBuffer`](crate::WindowBuffer) is in its lifecycle.
///
/// `Open -> Draining -> Closed`, or `Open -> Closed` directly on an early
/// close or a read failure. Nothing leaves `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// The source may still yield bytes.
    Open,
    /// The source is exhausted and released; staged windows are still served.
    Draining,
    /// Terminal. Every operation reports exhaustion.
    Closed,
}

impl BufferState {
    /// Returns true while the source is still bound.
    pub fn is_open(self) -> bool {
        self == BufferState::Open
    }
}

impl fmt::Display for BufferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BufferState::Open => "open",
            BufferState::Draining => "draining",
            BufferState::Closed => "closed",
        };
        f.write_str(s)
    }
}
