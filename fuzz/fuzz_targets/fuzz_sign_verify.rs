#![no_main]

use libfuzzer_sys::fuzz_target;
use stamped::{verify, SignatureCodec, SigningScheme};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = verify(content);

        // Whatever signs must verify
        for scheme in [SigningScheme::Full, SigningScheme::Partial] {
            if let Ok(signed) = SignatureCodec::default().sign(content, scheme) {
                assert!(verify(&signed).is_valid());
            }
        }
    }
});
