#![no_main]

use libfuzzer_sys::fuzz_target;
use rtmpio::{escape_bytes, print_escaped, Extent};

fuzz_target!(|data: Vec<u8>| {
    let whole = escape_bytes(&data);

    // Verify: always quoted
    assert!(whole.len() >= 2);
    assert!(whole.starts_with('"'));
    assert!(whole.ends_with('"'));

    // Verify: no raw control characters leak into the output
    assert!(!whole.chars().any(|c| c.is_control()));

    // Verify: NUL-terminated mode renders the prefix before the first NUL
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let mut terminated = String::new();
    print_escaped(&mut terminated, Some(&data), Extent::NulTerminated);
    assert_eq!(terminated, escape_bytes(&data[..end]));

    // Verify: determinism
    assert_eq!(whole, escape_bytes(&data));
});
