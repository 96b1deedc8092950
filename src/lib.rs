//! slurprs
//!
//! Whole-file ingestion under a memory budget.
//!
//! `slurprs` reads a file's entire contents into one freshly allocated
//! buffer and optionally splits it into zero-copy line views. It is
//! designed as a small, composable primitive for:
//!
//! - line-oriented tools that want the whole file at once
//! - parsers that need a single contiguous input buffer
//! - batch jobs with a hard cap on memory per input
//!
//! The crate intentionally:
//! - does NOT stream or read incrementally
//! - does NOT convert encodings
//! - does NOT memory-map
//! - does NOT retry transient I/O failures
//!
//! It only does one thing: **File in → one buffer (and lines) out**
//!
//! # Loading
//!
//! ```no_run
//! use slurprs::{Loader, LoadConfig, LoadError};
//!
//! fn main() -> Result<(), LoadError> {
//!     let loader = Loader::new(LoadConfig::binary());
//!     let buf = loader.load("data.bin")?;
//!     println!("read {} bytes", buf.len());
//!     Ok(())
//! }
//! ```
//!
//! # Line splitting
//!
//! Text mode strips carriage returns in place and splits on `\n`.
//! Empty lines are dropped; every returned line is non-empty and a
//! zero-copy slice of one shared buffer.
//!
//! ```no_run
//! use slurprs::{Loader, LoadConfig, LoadError};
//!
//! fn main() -> Result<(), LoadError> {
//!     let loader = Loader::new(LoadConfig::text().with_max_size(64 * 1024 * 1024));
//!     let lines = loader.read_lines("notes.txt")?;
//!     for line in &lines {
//!         println!("{}", String::from_utf8_lossy(line));
//!     }
//!     eprintln!("lineCount: {}", lines.count());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod lines;
mod loader;

mod buffer; // owned buffer + CR normalization

//
// Public surface (intentionally tiny)
//

pub use buffer::FileBuf;
pub use config::{LoadConfig, Mode};
pub use error::LoadError;
pub use lines::Lines;
pub use loader::Loader;
