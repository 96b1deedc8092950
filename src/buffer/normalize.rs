//! In-place carriage return removal.

use memchr::memchr;

/// Removes every `\r` byte from `buf`, compacting in place.
///
/// A buffer with no carriage returns is left untouched. Otherwise bytes
/// are copied toward a write cursor starting at the first `\r`, one
/// linear pass, no allocation. The vector is truncated to the number of
/// bytes kept; capacity is unchanged (the caller decides whether to
/// shrink).
pub(crate) fn strip_carriage_returns(buf: &mut Vec<u8>) {
    let Some(first) = memchr(b'\r', buf) else {
        return;
    };

    let mut write = first;
    for read in first..buf.len() {
        let b = buf[read];
        if b != b'\r' {
            buf[write] = b;
            write += 1;
        }
    }
    buf.truncate(write);
}
