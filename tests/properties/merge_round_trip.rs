//! Property tests for merging manual sections.

use proptest::prelude::*;

use stamped::{merge, RekeyMap, TextBlob};

fn body() -> impl Strategy<Value = String> {
    proptest::collection::vec("[ \ta-z0-9;]{0,20}", 0..5).prop_map(|lines| {
        lines
            .into_iter()
            .map(|line| format!("{line}\n"))
            .collect::<String>()
    })
}

fn render(bodies: &[String]) -> String {
    let mut text = String::from("header\n");
    for (i, body) in bodies.iter().enumerate() {
        text.push_str(&format!("# BEGIN MANUAL SECTION s{i}\n{body}# END MANUAL SECTION\ngenerated {i}\n"));
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging a prior into the same template reproduces the prior byte for byte.
    #[test]
    fn property_merge_restores_prior_bodies(
        prior_bodies in proptest::collection::vec(body(), 1..5),
    ) {
        let defaults: Vec<String> = prior_bodies.iter().map(|_| String::new()).collect();
        let template = TextBlob::new("out.txt", render(&defaults));
        let prior = TextBlob::new("out.txt", render(&prior_bodies));

        let merged = merge(&template, std::slice::from_ref(&prior), &RekeyMap::new()).unwrap();

        prop_assert_eq!(merged.text.as_str(), prior.text());
        prop_assert!(merged.dropped.is_empty());
        prop_assert!(!merged.has_new_sections());
    }

    /// PROPERTY: with no priors, the template comes back unchanged and every section is new.
    #[test]
    fn property_merge_without_priors_is_identity(bodies in proptest::collection::vec(body(), 0..5)) {
        let template = TextBlob::new("out.txt", render(&bodies));

        let merged = merge(&template, &[], &RekeyMap::new()).unwrap();

        prop_assert_eq!(merged.text.as_str(), template.text());
        prop_assert_eq!(merged.new_section_keys().count(), bodies.len());
    }
}
