//! Line views over one shared buffer.
//!
//! - [`Lines`] - Ordered, zero-copy line views plus their backing buffer
//! - `split` - the buffer walk that carves lines (crate internal)

mod set;

pub(crate) mod split;

pub use set::Lines;
