//! Configuration for load behavior.
//!
//! This module provides types to configure how a file is read:
//!
//! - [`LoadConfig`] - Controls mode, termination, and the memory limit
//! - [`Mode`] - Binary (bytes unmodified) or Text (carriage returns removed)
//!
//! # Example
//!
//! ```
//! use slurprs::{LoadConfig, Mode};
//!
//! // Text mode with a 16 MiB budget
//! let config = LoadConfig::text().with_max_size(16 * 1024 * 1024);
//! assert_eq!(config.mode(), Mode::Text);
//!
//! // Binary mode with an explicit terminator
//! let config = LoadConfig::binary().with_terminator(true);
//! assert!(config.terminated());
//! ```

/// How file bytes are treated after reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Return the file's bytes unmodified.
    Binary,

    /// Remove carriage returns and force a trailing NUL terminator.
    Text,
}

/// Configuration for a [`Loader`](crate::Loader).
///
/// `LoadConfig` controls three things:
///
/// - **Mode** - [`Mode::Binary`] returns bytes as-is; [`Mode::Text`]
///   strips `\r` bytes in place and always NUL-terminates.
/// - **Terminator** - whether a single `0` byte is appended after the
///   content (not counted in the reported length). Forced on in text
///   mode regardless of this setting.
/// - **Max size** - a hard cap, in bytes, on the total memory a call may
///   allocate. `0` means unbounded. A call whose required capacity
///   exceeds the cap fails with
///   [`LoadError::SizeLimitExceeded`](crate::LoadError::SizeLimitExceeded)
///   before allocating anything.
///
/// # Example
///
/// ```
/// use slurprs::LoadConfig;
///
/// // Default: binary, unterminated, unbounded
/// let config = LoadConfig::default();
/// assert_eq!(config.max_size(), 0);
///
/// // Builder pattern
/// let config = LoadConfig::text().with_max_size(1024);
/// assert_eq!(config.max_size(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadConfig {
    /// Load mode.
    mode: Mode,

    /// Whether to append a NUL terminator after the content.
    terminate: bool,

    /// Upper bound on allocated bytes per call. `0` = unbounded.
    max_size: u64,
}

impl LoadConfig {
    /// Creates a binary-mode configuration: bytes unmodified, no
    /// terminator, no size limit.
    pub const fn binary() -> Self {
        Self {
            mode: Mode::Binary,
            terminate: false,
            max_size: 0,
        }
    }

    /// Creates a text-mode configuration: carriage returns removed,
    /// NUL-terminated, no size limit.
    pub const fn text() -> Self {
        Self {
            mode: Mode::Text,
            terminate: true,
            max_size: 0,
        }
    }

    /// Sets whether a NUL terminator is appended.
    ///
    /// Text mode ignores `false` here; a terminator is required so text
    /// buffers always have a defined end for C-style scanning.
    ///
    /// # Example
    ///
    /// ```
    /// use slurprs::LoadConfig;
    ///
    /// let config = LoadConfig::binary().with_terminator(true);
    /// assert!(config.terminated());
    ///
    /// // Forced on for text
    /// let config = LoadConfig::text().with_terminator(false);
    /// assert!(config.terminated());
    /// ```
    pub const fn with_terminator(mut self, terminate: bool) -> Self {
        self.terminate = terminate;
        self
    }

    /// Sets the memory limit in bytes. `0` means unbounded.
    ///
    /// The limit covers everything a call allocates: the content buffer,
    /// its terminator byte, and (for line splitting) the line table.
    ///
    /// # Example
    ///
    /// ```
    /// use slurprs::LoadConfig;
    ///
    /// let config = LoadConfig::binary().with_max_size(4096);
    /// assert_eq!(config.max_size(), 4096);
    /// ```
    pub const fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns the load mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns whether loads will append a terminator, accounting for
    /// the forced terminator in text mode.
    pub const fn terminated(&self) -> bool {
        self.terminate || matches!(self.mode, Mode::Text)
    }

    /// Returns the memory limit (`0` = unbounded).
    pub const fn max_size(&self) -> u64 {
        self.max_size
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::binary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.mode(), Mode::Binary);
        assert!(!config.terminated());
        assert_eq!(config.max_size(), 0);
    }

    #[test]
    fn test_text_forces_terminator() {
        let config = LoadConfig::text().with_terminator(false);
        assert!(config.terminated());
    }

    #[test]
    fn test_binary_terminator_opt_in() {
        assert!(!LoadConfig::binary().terminated());
        assert!(LoadConfig::binary().with_terminator(true).terminated());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoadConfig::binary()
            .with_terminator(true)
            .with_max_size(8192);

        assert_eq!(config.mode(), Mode::Binary);
        assert!(config.terminated());
        assert_eq!(config.max_size(), 8192);
    }
}
