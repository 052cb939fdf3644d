//! Merge engine
//!
//! Splices manual-section bodies salvaged from prior versions of a file into
//! a freshly rendered template.
//!
//! Priors are consulted as independent blobs in priority order, never
//! concatenated, so markers from different files cannot collide and a
//! corrupt source is reported by its own path.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{RekeyMap, TextBlob};
use crate::domain::services::marker_scanner::{self, MarkerError};

/// Why a merge could not run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The fresh render itself has broken markers (a generator bug)
    #[error("template markers are malformed: {0}")]
    Template(#[source] MarkerError),

    /// A prior source cannot be trusted to extract bodies from
    #[error("prior source {} is corrupt: {source}", origin.display())]
    CorruptPrior {
        origin: PathBuf,
        #[source]
        source: MarkerError,
    },
}

/// Where a template section's final body came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resolution {
    /// Same key found in a prior source
    Direct { origin: PathBuf },
    /// Found under an old key listed in the rekey map
    Rekeyed { old_key: String, origin: PathBuf },
    /// No prior body; the template default was kept
    New,
}

/// Resolution of one template section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub key: String,
    pub resolution: Resolution,
}

/// A prior section with no home in the new template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSection {
    pub key: String,
    pub origin: PathBuf,
}

/// Final text plus a record of how every section was filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub text: String,
    pub sections: Vec<ResolvedSection>,
    pub dropped: Vec<DroppedSection>,
}

impl MergeResult {
    /// Whether any template section found no prior body
    pub fn has_new_sections(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.resolution == Resolution::New)
    }

    /// Keys of sections that kept their template default
    pub fn new_section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|s| s.resolution == Resolution::New)
            .map(|s| s.key.as_str())
    }
}

struct Salvaged<'a> {
    body: &'a str,
    origin: &'a Path,
}

/// Merge `template` with bodies from `priors`.
///
/// When a key appears in several priors the earliest prior wins. Keys the
/// template does not ask for are reported as dropped.
pub fn merge(
    template: &TextBlob,
    priors: &[TextBlob],
    rekey: &RekeyMap,
) -> Result<MergeResult, MergeError> {
    let wanted = marker_scanner::scan(template.text()).map_err(MergeError::Template)?;

    let scanned = priors
        .iter()
        .map(|prior| {
            marker_scanner::scan(prior.text())
                .map(|sections| (prior, sections))
                .map_err(|source| MergeError::CorruptPrior {
                    origin: prior.origin().to_path_buf(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut salvaged: HashMap<&str, Salvaged<'_>> = HashMap::new();
    let mut salvage_order: Vec<&str> = Vec::new();
    for (prior, sections) in &scanned {
        for section in sections {
            if salvaged.contains_key(section.key()) {
                continue;
            }
            salvaged.insert(
                section.key(),
                Salvaged {
                    body: section.body(prior.text()),
                    origin: prior.origin(),
                },
            );
            salvage_order.push(section.key());
        }
    }

    let source = template.text();
    let mut text = String::with_capacity(source.len());
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::with_capacity(wanted.len());
    let mut last = 0;

    for section in &wanted {
        let span = section.span();
        text.push_str(&source[last..span.start]);
        last = span.end;

        let key = section.key();
        let (body, resolution) = if let Some((found_key, found)) = salvaged.get_key_value(key) {
            consumed.insert(*found_key);
            (
                found.body,
                Resolution::Direct {
                    origin: found.origin.to_path_buf(),
                },
            )
        } else if let Some((old_key, found)) = rekey
            .aliases(key)
            .iter()
            .find_map(|old| salvaged.get_key_value(old.as_str()))
        {
            consumed.insert(*old_key);
            (
                found.body,
                Resolution::Rekeyed {
                    old_key: old_key.to_string(),
                    origin: found.origin.to_path_buf(),
                },
            )
        } else {
            (section.body(source), Resolution::New)
        };

        text.push_str(body);
        resolved.push(ResolvedSection {
            key: key.to_string(),
            resolution,
        });
    }
    text.push_str(&source[last..]);

    let dropped = salvage_order
        .into_iter()
        .filter(|key| !consumed.contains(key))
        .filter_map(|key| {
            salvaged.get(key).map(|found| DroppedSection {
                key: key.to_string(),
                origin: found.origin.to_path_buf(),
            })
        })
        .collect();

    Ok(MergeResult {
        text,
        sections: resolved,
        dropped,
    })
}

/// Sections of `priors` that a template without manual sections leaves behind.
///
/// Priors whose markers do not scan hold nothing salvageable and are skipped.
pub fn orphaned_sections(priors: &[TextBlob]) -> Vec<DroppedSection> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut orphaned = Vec::new();
    for prior in priors {
        let Ok(sections) = marker_scanner::scan(prior.text()) else {
            continue;
        };
        for section in sections {
            if seen.insert(section.key().to_string()) {
                orphaned.push(DroppedSection {
                    key: section.key().to_string(),
                    origin: prior.origin().to_path_buf(),
                });
            }
        }
    }
    orphaned
}
