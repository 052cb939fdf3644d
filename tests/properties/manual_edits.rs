//! Property tests for hand edits inside manual sections.

use proptest::prelude::*;

use stamped::{verify, SignatureCodec, SigningScheme, Verification};

fn lines() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z(){};= ]{0,24}", 0..6).prop_map(|lines| {
        lines
            .into_iter()
            .map(|line| format!("{line}\n"))
            .collect::<String>()
    })
}

fn render(prefix: &str, body: &str, suffix: &str) -> String {
    format!("{prefix}/* BEGIN MANUAL SECTION Foo::bar */\n{body}/* END MANUAL SECTION */\n{suffix}")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: replacing a manual section body keeps a partial signature valid.
    #[test]
    fn property_manual_edits_keep_signature_valid(
        prefix in lines(),
        default_body in lines(),
        edited_body in lines(),
        suffix in lines(),
    ) {
        let signed = SignatureCodec::default()
            .sign(&render(&prefix, &default_body, &suffix), SigningScheme::Partial)
            .unwrap();
        let header_end = signed.len() - render(&prefix, &default_body, &suffix).len();
        let edited = format!(
            "{}{}",
            &signed[..header_end],
            render(&prefix, &edited_body, &suffix)
        );

        prop_assert_eq!(
            verify(&edited),
            Verification::Valid { scheme: SigningScheme::Partial }
        );
    }

    /// PROPERTY: editing generated text around the section is still caught.
    #[test]
    fn property_generated_edits_are_caught(
        prefix in "[a-w]{1,20}\n",
        body in lines(),
    ) {
        let signed = SignatureCodec::default()
            .sign(&render(&prefix, &body, ""), SigningScheme::Partial)
            .unwrap();
        let tampered = signed.replacen(&prefix, &prefix.replace(|c: char| c != '\n', "z"), 1);

        prop_assert_eq!(
            verify(&tampered),
            Verification::Invalid { scheme: SigningScheme::Partial }
        );
    }
}
