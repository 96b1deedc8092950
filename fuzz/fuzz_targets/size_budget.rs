#![no_main]

use libfuzzer_sys::fuzz_target;
use slurprs::{LoadConfig, LoadError, Loader};

fuzz_target!(|input: (Vec<u8>, u16)| {
    let (data, max_size) = input;

    let config = LoadConfig::binary().with_max_size(u64::from(max_size));
    let loader = Loader::new(config);

    // Budgeted split either succeeds or reports the limit; never panics,
    // never reports anything else for in-memory input.
    match loader.split_bytes(data.clone()) {
        Ok(lines) => {
            for line in &lines {
                assert!(!line.is_empty());
            }
        }
        Err(LoadError::SizeLimitExceeded { required, max_size }) => {
            assert!(max_size != 0);
            assert!(required > max_size);
            // The content alone must already be close to the budget for
            // the combined charge to overflow it
            assert!(required > data.len() as u64 - count_crs(&data));
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    }
});

fn count_crs(data: &[u8]) -> u64 {
    data.iter().filter(|&&b| b == b'\r').count() as u64
}
