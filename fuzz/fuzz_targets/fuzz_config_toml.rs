#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config and rekey parsing should never panic
        let _ = toml::from_str::<stamped::Config>(content);
        let _ = stamped::RekeyMap::from_toml_str(content, std::path::Path::new("fuzz.toml"));
    }
});
