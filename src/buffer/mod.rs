//! The sliding-window buffer.
//!
//! - [`WindowBuffer`] - Generic core over any [`ByteSource`](crate::ByteSource)
//! - [`BufferState`] - Open / Draining / Closed lifecycle
//! - [`RolledBytes`] - Iterator over rolled-in bytes

mod iter;
mod state;
mod window;

pub use iter::RolledBytes;
pub use state::BufferState;
pub use window::WindowBuffer;
