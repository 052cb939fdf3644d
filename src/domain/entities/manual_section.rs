//! ManualSection entity - a named, hand-edited region of a blob
//!
//! Sections are a tagged span list over the blob's text: they never own the
//! body, they only say where it is.

use std::ops::Range;

/// A manual section found by the marker scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualSection {
    key: String,
    /// 1-based line of the begin marker
    line: usize,
    /// Byte span of the body, exclusive of both marker lines
    body: Range<usize>,
}

impl ManualSection {
    pub fn new(key: impl Into<String>, line: usize, body: Range<usize>) -> Self {
        Self {
            key: key.into(),
            line,
            body,
        }
    }

    /// Section key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 1-based line of the begin marker
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte span of the body in the scanned text
    pub fn span(&self) -> Range<usize> {
        self.body.clone()
    }

    /// Slice the body out of the text this section was scanned from
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body.clone()]
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_slices_scanned_text() {
        let text = "head\nbody line\ntail\n";
        let section = ManualSection::new("k", 1, 5..15);
        assert_eq!(section.body(text), "body line\n");
        assert_eq!(section.key(), "k");
        assert!(!section.is_empty());
    }

    #[test]
    fn empty_span_is_empty() {
        let section = ManualSection::new("k", 3, 10..10);
        assert!(section.is_empty());
        assert_eq!(section.span(), 10..10);
    }
}
