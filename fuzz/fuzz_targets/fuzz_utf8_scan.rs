#![no_main]

use libfuzzer_sys::fuzz_target;
use shakesearch::utils::{ceil_char_boundary, decode_backward, decode_forward, floor_char_boundary};

fuzz_target!(|data: &[u8]| {
    // Decoding at any offset of arbitrary bytes must stay in bounds
    for i in 0..=data.len() {
        let (_, width) = decode_forward(data, i);
        assert!(i + width <= data.len());
        let (_, width) = decode_backward(data, i);
        assert!(width <= i);
        assert!(floor_char_boundary(data, i) <= i);
        assert!(ceil_char_boundary(data, i) >= i.min(data.len()));
    }
});
