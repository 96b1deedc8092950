//! Whole-file load demo.
//!
//! Run with:
//!     cargo run --example load_file -- /path/to/file

use std::env;

use slurprs::{LoadConfig, Loader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Loading file: {}\n", path);

    // Binary identity load with a 256 MiB budget
    let loader = Loader::new(LoadConfig::binary().with_max_size(256 * 1024 * 1024));
    let buf = loader.load(&path)?;
    println!("binary: {} bytes", buf.len());

    // Text load: CRs stripped, NUL-terminated
    let loader = Loader::new(LoadConfig::text());
    let buf = loader.load(&path)?;
    println!(
        "text:   {} bytes (terminator at offset {})",
        buf.len(),
        buf.len()
    );

    Ok(())
}
