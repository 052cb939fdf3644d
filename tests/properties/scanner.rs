//! Property tests for the marker scanner: arbitrary input never panics.

use proptest::prelude::*;

use stamped::{scan, verify};

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BEGIN MANUAL SECTION k\n".to_string()),
        Just("BEGIN MANUAL SECTION k2\n".to_string()),
        Just("BEGIN MANUAL SECTION\n".to_string()),
        Just("END MANUAL SECTION\n".to_string()),
        Just("@generated SignedSource<<%%SIGNATURE%%>>\n".to_string()),
        Just("@partially-generated SignedSource<<abc>>\n".to_string()),
        ".{0,12}",
        "\\PC{0,8}\r?\n",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning and verifying arbitrary text never panics, and
    /// every reported body lies inside the text.
    #[test]
    fn property_scan_never_panics(parts in proptest::collection::vec(fragment(), 0..12)) {
        let text: String = parts.concat();

        if let Ok(sections) = scan(&text) {
            for section in &sections {
                prop_assert!(section.span().end <= text.len());
                prop_assert!(text.is_char_boundary(section.span().start));
            }
        }
        let _ = verify(&text);
    }
}
