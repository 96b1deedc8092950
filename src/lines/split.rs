//! The split walk: carve a loaded buffer into line views.

use std::mem;

use bytes::Bytes;
use memchr::memchr_iter;

use crate::buffer::FileBuf;
use crate::error::LoadError;
use crate::lines::Lines;

/// Splits a text-mode buffer into line views under the shared budget.
///
/// The buffer must already be CR-normalized. The line table is charged
/// against the same `max_size` the buffer was loaded under: the table
/// is additional memory beyond the text already counted, so the sum of
/// both allocations must fit. One table slot is reserved beyond the
/// estimate, matching the trailing sentinel of an argv-style array.
pub(crate) fn split(buf: FileBuf, max_size: u64) -> Result<Lines, LoadError> {
    let estimate = estimate_slots(buf.contents());

    let table_bytes = (estimate as u64 + 1) * mem::size_of::<Bytes>() as u64;
    let required = table_bytes + buf.len() as u64 + 1;
    if max_size != 0 && required > max_size {
        return Err(LoadError::SizeLimitExceeded { required, max_size });
    }

    let mut lines: Vec<Bytes> = Vec::new();
    lines.try_reserve_exact(estimate)?;

    if buf.is_empty() {
        // No lines: the backing buffer is dropped here, not returned.
        return Ok(Lines::new(Bytes::new(), lines));
    }

    let content = buf.freeze();
    let mut start = 0usize;
    for nl in memchr_iter(b'\n', &content) {
        // A delimiter directly after another delimiter (or at the start
        // of the buffer) would carve an empty line; skip it.
        if nl > start {
            lines.push(content.slice(start..nl));
        }
        start = nl + 1;
    }
    if start < content.len() {
        lines.push(content.slice(start..));
    }

    Ok(Lines::new(content, lines))
}

/// Upper bound on line-table slots: one per newline, plus one for a
/// final line with no trailing delimiter. Dropped empty lines make the
/// actual count lower, never higher.
fn estimate_slots(content: &[u8]) -> usize {
    let newlines = memchr_iter(b'\n', content).count();
    newlines + usize::from(!content.is_empty() && content.last() != Some(&b'\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_buf(content: &[u8]) -> FileBuf {
        let mut data = content.to_vec();
        data.push(0);
        FileBuf::new(data, true)
    }

    fn split_strs(content: &[u8]) -> Vec<String> {
        split(text_buf(content), 0)
            .unwrap()
            .iter()
            .map(|l| String::from_utf8(l.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_line_dropped() {
        assert_eq!(split_strs(b"a\nb\n\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_final_delimiter() {
        assert_eq!(split_strs(b"x\ny"), ["x", "y"]);
    }

    #[test]
    fn test_trailing_delimiter_adds_nothing() {
        assert_eq!(split_strs(b"x\ny\n"), ["x", "y"]);
    }

    #[test]
    fn test_leading_delimiter_adds_nothing() {
        assert_eq!(split_strs(b"\nx"), ["x"]);
    }

    #[test]
    fn test_only_delimiters() {
        assert_eq!(split_strs(b"\n\n\n"), Vec::<String>::new());
    }

    #[test]
    fn test_single_line_no_delimiter() {
        assert_eq!(split_strs(b"solo"), ["solo"]);
    }

    #[test]
    fn test_empty_buffer() {
        let lines = split(text_buf(b""), 0).unwrap();
        assert_eq!(lines.count(), 0);
        assert!(lines.content().is_empty());
    }

    #[test]
    fn test_estimate_is_upper_bound() {
        assert_eq!(estimate_slots(b""), 0);
        assert_eq!(estimate_slots(b"a\nb\n"), 2);
        assert_eq!(estimate_slots(b"a\nb"), 2);
        assert_eq!(estimate_slots(b"\n\n"), 2);
        // "\n\n" actually yields zero lines; 2 is only the bound
        assert_eq!(split_strs(b"\n\n"), Vec::<String>::new());
    }

    #[test]
    fn test_budget_counts_table_and_buffer() {
        let content = b"a\nb\n\nc";
        let estimate = estimate_slots(content) as u64;
        let required =
            (estimate + 1) * mem::size_of::<Bytes>() as u64 + content.len() as u64 + 1;

        let err = split(text_buf(content), required - 1).unwrap_err();
        assert!(matches!(err, LoadError::SizeLimitExceeded { .. }));

        assert!(split(text_buf(content), required).is_ok());
    }

    #[test]
    fn test_budget_zero_is_unbounded() {
        assert!(split(text_buf(b"a\nb"), 0).is_ok());
    }
}
