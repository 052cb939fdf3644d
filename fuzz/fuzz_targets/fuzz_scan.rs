#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Scanning arbitrary text must never panic or report an out-of-range body
        if let Ok(sections) = stamped::scan(content) {
            for section in &sections {
                let _ = section.body(content);
            }
        }
    }
});
