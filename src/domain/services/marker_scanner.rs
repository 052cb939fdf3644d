//! Marker scanner
//!
//! Finds manual-section boundaries in raw text. Markers are recognized by
//! their wording alone, so any comment syntax works:
//!
//! ```text
//! /* BEGIN MANUAL SECTION getName */
//! return $this->name;
//! /* END MANUAL SECTION */
//! ```
//!
//! A body is everything after the begin-marker line up to the start of the
//! end-marker line, byte for byte.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::entities::ManualSection;

static BEGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bBEGIN MANUAL SECTION\b(?:[ \t]+([-A-Za-z0-9_:.$\\]+))?").unwrap()
});
static END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bEND MANUAL SECTION\b").unwrap());

/// What is wrong with a blob's markers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerErrorKind {
    #[error("manual section '{key}' is never closed")]
    UnclosedSection { key: String },

    #[error("manual section '{inner}' begins inside open section '{outer}'")]
    NestedSection { outer: String, inner: String },

    #[error("end marker without a matching begin marker")]
    UnexpectedEnd,

    #[error("duplicate manual section key '{key}'")]
    DuplicateKey { key: String },

    #[error("begin marker without a section key")]
    MissingKey,

    #[error("begin and end markers share a line")]
    SharedLine,
}

/// A marker violation and the 1-based line it was found on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct MarkerError {
    pub kind: MarkerErrorKind,
    pub line: usize,
}

impl MarkerError {
    pub fn new(kind: MarkerErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

struct OpenSection<'a> {
    key: &'a str,
    line: usize,
    body_start: usize,
}

/// Scan `text` for manual sections, in order of appearance.
pub fn scan(text: &str) -> Result<Vec<ManualSection>, MarkerError> {
    let mut sections = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut open: Option<OpenSection<'_>> = None;
    let mut offset = 0;

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let line_start = offset;
        offset += line.len();

        let begin = BEGIN_RE.captures(line);
        let has_end = END_RE.is_match(line);

        match (begin, has_end) {
            (Some(_), true) => {
                return Err(MarkerError::new(MarkerErrorKind::SharedLine, line_no));
            }
            (Some(caps), false) => {
                let key = caps
                    .get(1)
                    .map(|m| m.as_str())
                    .ok_or_else(|| MarkerError::new(MarkerErrorKind::MissingKey, line_no))?;

                if let Some(outer) = &open {
                    return Err(MarkerError::new(
                        MarkerErrorKind::NestedSection {
                            outer: outer.key.to_string(),
                            inner: key.to_string(),
                        },
                        line_no,
                    ));
                }
                if !seen.insert(key) {
                    return Err(MarkerError::new(
                        MarkerErrorKind::DuplicateKey {
                            key: key.to_string(),
                        },
                        line_no,
                    ));
                }

                open = Some(OpenSection {
                    key,
                    line: line_no,
                    body_start: offset,
                });
            }
            (None, true) => {
                let section = open
                    .take()
                    .ok_or_else(|| MarkerError::new(MarkerErrorKind::UnexpectedEnd, line_no))?;
                sections.push(ManualSection::new(
                    section.key,
                    section.line,
                    section.body_start..line_start,
                ));
            }
            (None, false) => {}
        }
    }

    if let Some(section) = open {
        return Err(MarkerError::new(
            MarkerErrorKind::UnclosedSection {
                key: section.key.to_string(),
            },
            section.line,
        ));
    }

    Ok(sections)
}

/// Copy of `text` with every section body removed, markers kept.
///
/// `sections` must come from scanning `text`.
pub fn blank_bodies(text: &str, sections: &[ManualSection]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for section in sections {
        let span = section.span();
        out.push_str(&text[last..span.start]);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECTIONS: &str = "\
class Foo {
  /* BEGIN MANUAL SECTION Foo::getName */
  return $this->name;
  /* END MANUAL SECTION */

  // BEGIN MANUAL SECTION Foo::setName
  // END MANUAL SECTION
}
";

    #[test]
    fn scan_finds_sections_in_order() {
        let sections = scan(TWO_SECTIONS).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key(), "Foo::getName");
        assert_eq!(sections[0].line(), 2);
        assert_eq!(sections[0].body(TWO_SECTIONS), "  return $this->name;\n");
        assert_eq!(sections[1].key(), "Foo::setName");
        assert_eq!(sections[1].body(TWO_SECTIONS), "");
    }

    #[test]
    fn scan_plain_text_has_no_sections() {
        assert!(scan("no markers here\n").unwrap().is_empty());
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn scan_accepts_hash_comments_and_namespaced_keys() {
        let text = "# BEGIN MANUAL SECTION Ns\\Foo.bar-1\nx = 1\n# END MANUAL SECTION\n";
        let sections = scan(text).unwrap();
        assert_eq!(sections[0].key(), "Ns\\Foo.bar-1");
        assert_eq!(sections[0].body(text), "x = 1\n");
    }

    #[test]
    fn scan_preserves_crlf_in_body() {
        let text = "// BEGIN MANUAL SECTION k\r\na\r\n\r\n// END MANUAL SECTION\r\n";
        let sections = scan(text).unwrap();
        assert_eq!(sections[0].body(text), "a\r\n\r\n");
    }

    #[test]
    fn scan_end_marker_without_trailing_newline() {
        let text = "// BEGIN MANUAL SECTION k\nbody\n// END MANUAL SECTION";
        let sections = scan(text).unwrap();
        assert_eq!(sections[0].body(text), "body\n");
    }

    #[test]
    fn scan_rejects_unclosed_section() {
        let err = scan("x\n/* BEGIN MANUAL SECTION a */\nbody\n").unwrap_err();
        assert_eq!(
            err,
            MarkerError::new(
                MarkerErrorKind::UnclosedSection {
                    key: "a".to_string()
                },
                2
            )
        );
    }

    #[test]
    fn scan_rejects_nested_section() {
        let text = "/* BEGIN MANUAL SECTION a */\n/* BEGIN MANUAL SECTION b */\n/* END MANUAL SECTION */\n/* END MANUAL SECTION */\n";
        let err = scan(text).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, MarkerErrorKind::NestedSection { .. }));
    }

    #[test]
    fn scan_rejects_stray_end() {
        let err = scan("a\n/* END MANUAL SECTION */\n").unwrap_err();
        assert_eq!(err, MarkerError::new(MarkerErrorKind::UnexpectedEnd, 2));
    }

    #[test]
    fn scan_rejects_duplicate_key() {
        let text = "\
/* BEGIN MANUAL SECTION a */
/* END MANUAL SECTION */
/* BEGIN MANUAL SECTION a */
/* END MANUAL SECTION */
";
        let err = scan(text).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.kind,
            MarkerErrorKind::DuplicateKey {
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn scan_rejects_missing_key() {
        let err = scan("/* BEGIN MANUAL SECTION */\n/* END MANUAL SECTION */\n").unwrap_err();
        assert_eq!(err, MarkerError::new(MarkerErrorKind::MissingKey, 1));
    }

    #[test]
    fn scan_rejects_shared_line() {
        let err =
            scan("/* BEGIN MANUAL SECTION a */ x /* END MANUAL SECTION */\n").unwrap_err();
        assert_eq!(err.kind, MarkerErrorKind::SharedLine);
    }

    #[test]
    fn blank_bodies_keeps_markers() {
        let sections = scan(TWO_SECTIONS).unwrap();
        let blanked = blank_bodies(TWO_SECTIONS, &sections);

        assert!(!blanked.contains("return $this->name;"));
        assert!(blanked.contains("/* BEGIN MANUAL SECTION Foo::getName */\n  /* END MANUAL SECTION */"));
        assert!(blanked.ends_with("}\n"));
    }
}
