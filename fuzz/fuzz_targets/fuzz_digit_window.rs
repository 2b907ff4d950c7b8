#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use prnglab_core::digits::{digit_count, middle_window, pow10};
use prnglab_core::WindowPolicy;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the width, the rest is the value.
    let width = u32::from(data[0] % 40) + 1;
    let value = BigUint::from_bytes_le(&data[1..]);
    let len = digit_count(&value);

    let rejected = middle_window(&value, width, WindowPolicy::Reject);
    assert_eq!(rejected.is_some(), len >= width, "width={width} len={len}");

    let padded = middle_window(&value, width, WindowPolicy::ZeroPad)
        .expect("zero padding always yields a window");
    assert!(padded < pow10(width), "window wider than {width} digits");
    if let Some(window) = rejected {
        assert_eq!(window, padded);
    }
});
