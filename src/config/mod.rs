//! Configuration for window buffering.
//!
//! - [`WindowConfig`] - Staging capacity and exposed window width
//!
//! # Example
//!
//! ```
//! use rollbuf::WindowConfig;
//!
//! // 1 KiB staging array, 16 byte window
//! let config = WindowConfig::new(1024, 16)?;
//!
//! // Builder pattern
//! let config = WindowConfig::default()
//!     .with_capacity(4096)
//!     .with_window_size(48);
//! assert!(config.validate().is_ok());
//! # Ok::<(), rollbuf::WindowError>(())
//! ```

use crate::error::WindowError;

/// Default staging array size (64 KiB).
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Default window width (64 bytes).
pub const DEFAULT_WINDOW_SIZE: usize = 64;

/// Configuration for a [`WindowBuffer`](crate::WindowBuffer).
///
/// The window must always fit inside one staging array, so a `capacity`
/// smaller than `window_size` is silently raised to `window_size`.
/// [`capacity()`](WindowConfig::capacity) reports the raised value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowConfig {
    capacity: usize,
    window_size: usize,
}

impl WindowConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfig`] if either size is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rollbuf::WindowConfig;
    ///
    /// let config = WindowConfig::new(8, 16)?;
    /// assert_eq!(config.capacity(), 16);
    /// assert!(WindowConfig::new(1024, 0).is_err());
    /// # Ok::<(), rollbuf::WindowError>(())
    /// ```
    pub fn new(capacity: usize, window_size: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidConfig {
                message: "capacity must be non-zero",
            });
        }

        if window_size == 0 {
            return Err(WindowError::InvalidConfig {
                message: "window_size must be non-zero",
            });
        }

        Ok(Self {
            capacity,
            window_size,
        })
    }

    /// Sets the staging array size.
    ///
    /// Note: This does not validate the configuration. Use [`WindowConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the window width.
    ///
    /// Note: This does not validate the configuration. Use [`WindowConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Returns the staging array size, raised to `window_size` if smaller.
    pub fn capacity(&self) -> usize {
        self.capacity.max(self.window_size)
    }

    /// Returns the configured window width.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), WindowError> {
        Self::new(self.capacity, self.window_size).map(|_| ())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
        assert_eq!(config.window_size(), DEFAULT_WINDOW_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = WindowConfig::default()
            .with_capacity(1024)
            .with_window_size(16);

        assert_eq!(config.capacity(), 1024);
        assert_eq!(config.window_size(), 16);
    }

    #[test]
    fn test_capacity_raised_to_window_size() {
        let config = WindowConfig::new(4, 16).unwrap();
        assert_eq!(config.capacity(), 16);

        let config = WindowConfig::default().with_capacity(1).with_window_size(100);
        assert_eq!(config.capacity(), 100);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        assert!(WindowConfig::new(0, 16).is_err());
        assert!(WindowConfig::new(1024, 0).is_err());
        assert!(WindowConfig::new(0, 0).is_err());
    }

    #[test]
    fn test_validate_after_builder() {
        let config = WindowConfig::default().with_window_size(0);
        assert!(matches!(
            config.validate(),
            Err(WindowError::InvalidConfig { .. })
        ));
    }
}
