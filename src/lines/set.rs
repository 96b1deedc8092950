//! The Lines type - line views sharing one backing buffer.

use bytes::Bytes;
use std::fmt;
use std::ops::Index;

/// The lines of one file, as zero-copy views into one shared buffer.
///
/// Produced by [`Loader::read_lines`](crate::Loader::read_lines). Every
/// line is a non-empty [`Bytes`] slice of the same backing buffer, in
/// file order, with carriage returns and line feeds removed. Empty lines
/// are not materialized: two adjacent delimiters, or a delimiter at the
/// start or end of the file, contribute no entry.
///
/// Dropping `Lines` releases the line table and the backing buffer as
/// one unit; the buffer is refcounted, so it is freed exactly once no
/// matter how many views exist.
///
/// # Example
///
/// ```
/// use slurprs::Loader;
///
/// let lines = Loader::default().split_bytes(&b"a\r\nb\n\nc"[..])?;
/// assert_eq!(lines.count(), 3);
/// assert_eq!(&lines[0], "a");
/// assert_eq!(&lines[2], "c");
/// # Ok::<(), slurprs::LoadError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lines {
    /// Backing buffer every line aliases. Empty for an empty file.
    content: Bytes,

    /// Non-empty, non-overlapping slices of `content`, in file order.
    lines: Vec<Bytes>,
}

impl Lines {
    /// Assembles the result of a split walk.
    pub(crate) fn new(content: Bytes, lines: Vec<Bytes>) -> Self {
        Self { content, lines }
    }

    /// Returns the number of lines.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file produced no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Bytes> {
        self.lines.get(index)
    }

    /// Returns all lines as a slice.
    pub fn as_slice(&self) -> &[Bytes] {
        &self.lines
    }

    /// Returns an iterator over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.lines.iter()
    }

    /// Returns the shared backing buffer (carriage returns removed,
    /// line feeds still present).
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Consumes the set and returns the line views.
    ///
    /// The backing buffer stays alive for as long as any view does.
    pub fn into_vec(self) -> Vec<Bytes> {
        self.lines
    }
}

impl Index<usize> for Lines {
    type Output = Bytes;

    fn index(&self, index: usize) -> &Bytes {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Bytes;
    type IntoIter = std::slice::Iter<'a, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines({} lines, {} bytes)",
            self.lines.len(),
            self.content.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lines {
        let content = Bytes::from_static(b"a\nb");
        let lines = vec![content.slice(0..1), content.slice(2..3)];
        Lines::new(content, lines)
    }

    #[test]
    fn test_accessors() {
        let lines = sample();
        assert_eq!(lines.count(), 2);
        assert!(!lines.is_empty());
        assert_eq!(lines.get(0).unwrap().as_ref(), b"a");
        assert_eq!(lines.get(2), None);
        assert_eq!(&lines[1], "b");
    }

    #[test]
    fn test_default_is_empty() {
        let lines = Lines::default();
        assert_eq!(lines.count(), 0);
        assert!(lines.is_empty());
        assert!(lines.content().is_empty());
    }

    #[test]
    fn test_iteration() {
        let lines = sample();
        let collected: Vec<&[u8]> = lines.iter().map(|l| l.as_ref()).collect();
        assert_eq!(collected, vec![&b"a"[..], &b"b"[..]]);

        let mut n = 0;
        for _ in &lines {
            n += 1;
        }
        assert_eq!(n, 2);
    }

    #[test]
    fn test_lines_alias_content() {
        let lines = sample();
        let content = lines.content().clone();
        for line in &lines {
            let start = line.as_ptr() as usize;
            let base = content.as_ptr() as usize;
            assert!(start >= base && start + line.len() <= base + content.len());
        }
    }

    #[test]
    fn test_display() {
        let s = format!("{}", sample());
        assert!(s.contains("2 lines"));
        assert!(s.contains("3 bytes"));
    }
}
