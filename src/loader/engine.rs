//! Core load engine - Loader with the whole-file API.
//!
//! This module implements the synchronous load path:
//!
//! - [`Loader::load`] - one file → one [`FileBuf`]
//! - [`Loader::read_lines`] - one file → [`Lines`] (text mode forced)
//! - [`Loader::split_bytes`] - in-memory data → [`Lines`]
//!
//! Each load is one open/seek/read sequence on the calling thread; the
//! file handle is scoped and closed on every exit path. Every call
//! operates on its own freshly allocated buffer, so concurrent calls
//! from independent threads are safe by construction.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::buffer::{FileBuf, normalize};
use crate::config::{LoadConfig, Mode};
use crate::error::LoadError;
use crate::lines::{Lines, split};

/// Reads whole files into owned buffers or zero-copy line views.
///
/// `Loader` is the high-level API. It holds a [`LoadConfig`] and
/// provides methods to ingest a file either as one [`FileBuf`] or as
/// [`Lines`].
///
/// # Memory budget
///
/// When the config carries a non-zero `max_size`, the required capacity
/// is computed up front and checked against it *before* any allocation:
/// content bytes plus terminator for [`Loader::load`], plus the line
/// table for [`Loader::read_lines`]. A call over budget fails with
/// [`LoadError::SizeLimitExceeded`] having allocated nothing.
///
/// # Failure discipline
///
/// Failures propagate immediately as typed errors; whatever the call
/// allocated before failing is dropped before it returns. Ownership of
/// the buffer transfers to the caller only on success.
///
/// # Example
///
/// ```no_run
/// use slurprs::{Loader, LoadConfig};
///
/// let loader = Loader::new(LoadConfig::text());
/// let buf = loader.load("notes.txt")?;
/// println!("{} content bytes", buf.len());
/// # Ok::<(), slurprs::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Loader {
    config: LoadConfig,
}

impl Loader {
    /// Creates a new loader with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use slurprs::{Loader, LoadConfig};
    ///
    /// let loader = Loader::new(LoadConfig::binary().with_max_size(1 << 20));
    /// ```
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this loader.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Reads the entire file at `path` into one freshly allocated buffer.
    ///
    /// In [`Mode::Text`] carriage returns are removed and the buffer is
    /// always NUL-terminated; in [`Mode::Binary`] the bytes come back
    /// unmodified, with a terminator only if configured.
    ///
    /// The file's size is taken by seeking to the end; a file that turns
    /// out shorter than reported is not an error, the byte count
    /// actually read is authoritative.
    ///
    /// # Errors
    ///
    /// - [`LoadError::EmptyPath`] - `path` is empty
    /// - [`LoadError::Io`] - open, seek, or read failed
    /// - [`LoadError::SizeLimitExceeded`] - required capacity over budget
    /// - [`LoadError::OutOfMemory`] - the allocator refused the buffer
    pub fn load(&self, path: impl AsRef<Path>) -> Result<FileBuf, LoadError> {
        load_file(path.as_ref(), self.config)
    }

    /// Reads the file at `path` and splits it into lines.
    ///
    /// The file is loaded in text mode with a terminator regardless of
    /// the configured mode; splitting requires both. Lines are
    /// non-empty, zero-copy views of one shared buffer, with `\r` and
    /// `\n` bytes excluded. Empty lines are dropped, so the count can be
    /// lower than the file's newline count.
    ///
    /// The configured `max_size` covers the text buffer and the line
    /// table together.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slurprs::Loader;
    ///
    /// let lines = Loader::default().read_lines("notes.txt")?;
    /// for line in &lines {
    ///     println!("{}", String::from_utf8_lossy(line));
    /// }
    /// # Ok::<(), slurprs::LoadError>(())
    /// ```
    pub fn read_lines(&self, path: impl AsRef<Path>) -> Result<Lines, LoadError> {
        let config = LoadConfig::text().with_max_size(self.config.max_size());
        let buf = load_file(path.as_ref(), config)?;
        split::split(buf, self.config.max_size())
    }

    /// Splits an in-memory buffer into lines.
    ///
    /// This is a convenience for data that is already in memory: the
    /// same CR normalization, budget accounting, and split walk as
    /// [`Loader::read_lines`], without touching the filesystem.
    ///
    /// # Example
    ///
    /// ```
    /// use slurprs::Loader;
    ///
    /// let lines = Loader::default().split_bytes(&b"a\r\nb\n\nc"[..])?;
    /// assert_eq!(lines.count(), 3);
    /// # Ok::<(), slurprs::LoadError>(())
    /// ```
    pub fn split_bytes(&self, data: impl Into<Vec<u8>>) -> Result<Lines, LoadError> {
        let mut data = data.into();
        normalize::strip_carriage_returns(&mut data);
        split::split(FileBuf::new(data, false), self.config.max_size())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(LoadConfig::default())
    }
}

/// The load path: open, size, budget-check, allocate, read, normalize,
/// terminate, shrink.
fn load_file(path: &Path, config: LoadConfig) -> Result<FileBuf, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }

    let terminated = config.terminated();
    let mut file = File::open(path)?;
    let size = file.seek(SeekFrom::End(0))?;

    let required = size + u64::from(terminated);
    let max_size = config.max_size();
    if max_size != 0 && required > max_size {
        return Err(LoadError::SizeLimitExceeded { required, max_size });
    }

    // A size that does not fit in the address space cannot be allocated.
    let capacity = usize::try_from(required).map_err(|_| LoadError::OutOfMemory)?;
    let mut data: Vec<u8> = Vec::new();
    data.try_reserve_exact(capacity)?;

    file.seek(SeekFrom::Start(0))?;
    // Short reads are tolerated (some filesystems report stale sizes);
    // the count actually read is authoritative from here on. A read
    // error drops the partial buffer on the way out.
    file.take(size).read_to_end(&mut data)?;

    if config.mode() == Mode::Text {
        normalize::strip_carriage_returns(&mut data);
    }
    if terminated {
        data.push(0);
    }

    // CR removal or a short read can leave the allocation larger than
    // the content; hand the excess back. The caller only ever observes
    // the length, so a shrink that does nothing changes nothing.
    data.shrink_to_fit();

    Ok(FileBuf::new(data, terminated))
}
