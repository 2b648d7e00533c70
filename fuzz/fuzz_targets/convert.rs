#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let output = epicenter::convert(s);
        // Output is always the sentinel or an array
        assert!(output == "{}" || (output.starts_with('[') && output.ends_with(']')));
    }
});
