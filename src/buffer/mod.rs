//! Owned file buffer and text normalization.
//!
//! - [`FileBuf`] - Single-owner buffer holding one file's contents
//! - `normalize` - in-place carriage return removal (crate internal)

mod filebuf;

pub(crate) mod normalize;

pub use filebuf::FileBuf;
