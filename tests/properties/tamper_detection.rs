//! Property tests for signature tamper detection.

use proptest::prelude::*;

use stamped::{verify, SignatureCodec, SigningScheme, Verification};

/// Generated-only content: lowercase lines, so no markers or tokens
fn generated_body() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z ]{0,30}", 1..8).prop_map(|lines| {
        lines
            .into_iter()
            .map(|line| format!("{line}\n"))
            .collect::<String>()
    })
}

fn flip(c: char) -> char {
    if c == 'x' {
        'y'
    } else {
        'x'
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: changing any character of a fully generated file invalidates it.
    #[test]
    fn property_flipping_generated_char_is_detected(
        body in generated_body(),
        pick in any::<prop::sample::Index>(),
    ) {
        let signed = SignatureCodec::default().sign(&body, SigningScheme::Full).unwrap();
        prop_assert!(verify(&signed).is_valid());

        let offset = signed.len() - body.len();
        let (i, c) = body.char_indices().nth(pick.index(body.chars().count())).unwrap();
        let mut tampered = signed.clone();
        tampered.replace_range(offset + i..offset + i + c.len_utf8(), &flip(c).to_string());

        prop_assert_eq!(
            verify(&tampered),
            Verification::Invalid { scheme: SigningScheme::Full }
        );
    }

    /// PROPERTY: signing is a fixed point for both schemes.
    #[test]
    fn property_signing_twice_changes_nothing(body in generated_body()) {
        let codec = SignatureCodec::default();

        let full = codec.sign(&body, SigningScheme::Full).unwrap();
        prop_assert_eq!(codec.sign(&full, SigningScheme::Full).unwrap(), full);

        let sectioned = format!("{body}// BEGIN MANUAL SECTION k\n{body}// END MANUAL SECTION\n");
        let partial = codec.sign(&sectioned, SigningScheme::Partial).unwrap();
        prop_assert_eq!(codec.sign(&partial, SigningScheme::Partial).unwrap(), partial);
    }
}
