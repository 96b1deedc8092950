#![no_main]

use libfuzzer_sys::fuzz_target;
use slurprs::Loader;

fuzz_target!(|data: Vec<u8>| {
    let loader = Loader::default();
    let lines = loader.split_bytes(data.clone()).expect("unbounded split");

    // Verify: no line is empty
    for line in &lines {
        assert!(!line.is_empty());
    }

    // Verify: no line carries a CR or LF byte
    for line in &lines {
        assert!(!line.contains(&b'\r'));
        assert!(!line.contains(&b'\n'));
    }

    // Verify: joined lines reconstruct the input minus CRs and LFs
    let joined: Vec<u8> = lines.iter().flat_map(|l| l.to_vec()).collect();
    let expected: Vec<u8> = data
        .iter()
        .copied()
        .filter(|&b| b != b'\r' && b != b'\n')
        .collect();
    assert_eq!(joined, expected);

    // Verify: every line is a slice of the shared backing buffer
    let base = lines.content().as_ptr() as usize;
    let end = base + lines.content().len();
    for line in &lines {
        let start = line.as_ptr() as usize;
        assert!(start >= base && start + line.len() <= end);
    }

    // Verify: determinism - same input produces same lines
    let again = loader.split_bytes(data).expect("unbounded split");
    assert_eq!(lines.count(), again.count());
    for (a, b) in lines.iter().zip(again.iter()) {
        assert_eq!(a, b);
    }
});
