//! Line-splitting demo: the classic argv-style consumer.
//!
//! Reads the file named on the command line, prints each line to stdout
//! and the line count to stderr.
//!
//! Run with:
//!     cargo run --example read_lines -- /path/to/file

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use slurprs::Loader;

fn main() -> ExitCode {
    let mut args = env::args();
    let prog = args.next().unwrap_or_else(|| "read_lines".to_string());
    let Some(path) = args.next() else {
        eprintln!("Usage: {} filename", prog);
        return ExitCode::FAILURE;
    };

    let lines = match Loader::default().read_lines(&path) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("{}: reading file \"{}\": {}", prog, path, e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in &lines {
        if out.write_all(line).and_then(|_| out.write_all(b"\n")).is_err() {
            return ExitCode::FAILURE;
        }
    }
    if out.flush().is_err() {
        return ExitCode::FAILURE;
    }

    eprintln!("lineCount: {}", lines.count());

    ExitCode::SUCCESS
}
