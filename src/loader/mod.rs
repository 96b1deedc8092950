//! Load engine for whole-file ingestion.
//!
//! - [`Loader`] - Reads a whole file into one buffer, or into lines

mod engine;

pub use engine::Loader;
