//! The FileBuf type - one file's contents in one owned buffer.

use bytes::Bytes;
use std::fmt;

/// An owned buffer holding the entire contents of one file.
///
/// A `FileBuf` is produced by [`Loader::load`](crate::Loader::load) and
/// has exactly one owner; it is moved, never shared. The content is
/// `len()` bytes, optionally followed by a single NUL terminator that is
/// not counted in the length. Dropping the `FileBuf` releases the
/// allocation.
///
/// # Example
///
/// ```no_run
/// use slurprs::{Loader, LoadConfig};
///
/// let buf = Loader::new(LoadConfig::text()).load("notes.txt")?;
/// assert!(buf.terminated());
/// assert_eq!(buf.raw()[buf.len()], 0);
/// # Ok::<(), slurprs::LoadError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuf {
    /// Content bytes, plus one trailing NUL when `terminated`.
    data: Vec<u8>,

    /// Whether `data` carries a trailing NUL not counted in `len`.
    terminated: bool,
}

impl FileBuf {
    /// Wraps an already-filled buffer.
    ///
    /// `data` must already include the trailing NUL when `terminated`.
    pub(crate) fn new(data: Vec<u8>, terminated: bool) -> Self {
        debug_assert!(!terminated || data.last() == Some(&0));
        Self { data, terminated }
    }

    /// Returns the content length in bytes, excluding any terminator.
    pub fn len(&self) -> usize {
        self.data.len() - usize::from(self.terminated)
    }

    /// Returns true if the file content is empty.
    ///
    /// A terminated buffer for an empty file is still empty: the
    /// terminator is not content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the buffer carries a trailing NUL terminator.
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// Returns the content bytes, excluding any terminator.
    pub fn contents(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Returns the underlying bytes including the terminator, if any.
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the content bytes.
    ///
    /// The terminator, if present, is truncated away.
    pub fn into_vec(mut self) -> Vec<u8> {
        let len = self.len();
        self.data.truncate(len);
        self.data
    }

    /// Consumes the buffer and returns a shared, zero-copy view of the
    /// content bytes.
    ///
    /// The allocation (terminator included) is retained by the returned
    /// [`Bytes`]; the view excludes the terminator. This is the handoff
    /// point from single ownership to refcounted line views.
    pub fn freeze(self) -> Bytes {
        let len = self.len();
        Bytes::from(self.data).slice(..len)
    }
}

impl AsRef<[u8]> for FileBuf {
    fn as_ref(&self) -> &[u8] {
        self.contents()
    }
}

impl fmt::Display for FileBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileBuf({} bytes", self.len())?;
        if self.terminated {
            write!(f, ", terminated")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated() {
        let buf = FileBuf::new(b"hello".to_vec(), false);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.contents(), b"hello");
        assert_eq!(buf.raw(), b"hello");
        assert!(!buf.terminated());
    }

    #[test]
    fn test_terminated() {
        let buf = FileBuf::new(b"hello\0".to_vec(), true);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.contents(), b"hello");
        assert_eq!(buf.raw(), b"hello\0");
        assert_eq!(buf.raw()[buf.len()], 0);
    }

    #[test]
    fn test_empty_terminated() {
        let buf = FileBuf::new(vec![0], true);
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.raw(), &[0]);
    }

    #[test]
    fn test_into_vec_drops_terminator() {
        let buf = FileBuf::new(b"abc\0".to_vec(), true);
        assert_eq!(buf.into_vec(), b"abc");
    }

    #[test]
    fn test_freeze_excludes_terminator() {
        let buf = FileBuf::new(b"abc\0".to_vec(), true);
        let bytes = buf.freeze();
        assert_eq!(bytes.as_ref(), b"abc");
    }

    #[test]
    fn test_display() {
        let buf = FileBuf::new(b"abc\0".to_vec(), true);
        let s = format!("{}", buf);
        assert!(s.contains("3 bytes"));
        assert!(s.contains("terminated"));
    }
}
