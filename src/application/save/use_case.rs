//! Save Use Case
//!
//! Runs the write coordinator for one target: load priors, verify, merge or
//! sign, then write if the bytes changed.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::TextBlob;
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    assert_valid_manual_sections, merge, orphaned_sections, verify, MergeResult, Resolution, ResolvedSection,
    Verification,
};
use crate::domain::value_objects::{SaveOutcome, SigningScheme};
use crate::error::{StampedError, StampedResult};

use super::options::{SaveOptions, SaveRequest};
use super::result::SaveResult;

/// Save use case - regenerates a signed file without losing manual sections
pub struct SaveUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    config: Config,
}

impl<FS> SaveUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new save use case
    pub fn new(fs: FS, config: Config) -> Self {
        Self { fs, config }
    }

    /// Execute the save.
    ///
    /// Any rejection leaves the target untouched.
    pub fn execute(&self, request: &SaveRequest, options: &SaveOptions) -> StampedResult<SaveResult> {
        let target = self.config.resolve_path(&request.target);
        let exists = self.fs.exists(&target);
        tracing::debug!(target = %target.display(), exists, "starting save");

        if options.create_only && exists {
            tracing::info!(target = %target.display(), "target exists, create-only mode leaves it alone");
            return Ok(SaveResult::skipped(target));
        }

        let (priors, previous) = self.load_priors(request, &target, exists)?;
        tracing::debug!(count = priors.len(), "loaded prior sources");

        if options.clobber {
            tracing::debug!("clobber mode, skipping signature verification");
        } else {
            for prior in &priors {
                check_trusted(prior)?;
            }
        }

        let template = TextBlob::new(&target, request.template.as_str());
        let template_sections = assert_valid_manual_sections(&template)?;
        let codec = self
            .config
            .signature_codec()
            .with_generated_from(request.generated_from.clone());

        let scheme = SigningScheme::for_section_count(template_sections.len());
        let merged = match scheme {
            SigningScheme::Full => {
                tracing::debug!("no manual sections, signing the whole file");
                MergeResult {
                    text: template.into_text(),
                    sections: Vec::new(),
                    dropped: orphaned_sections(&priors),
                }
            }
            SigningScheme::Partial if priors.is_empty() => {
                tracing::debug!(sections = template_sections.len(), "first render, keeping template defaults");
                MergeResult {
                    sections: template_sections
                        .iter()
                        .map(|s| ResolvedSection {
                            key: s.key().to_string(),
                            resolution: Resolution::New,
                        })
                        .collect(),
                    text: template.into_text(),
                    dropped: Vec::new(),
                }
            }
            SigningScheme::Partial => {
                tracing::debug!(sections = template_sections.len(), "merging manual sections");
                merge(&template, &priors, &request.rekey)
                    .map_err(|e| StampedError::from_merge(target.clone(), e))?
            }
        };

        if self.config.save.warn_dropped_sections {
            for dropped in &merged.dropped {
                tracing::warn!(
                    key = %dropped.key,
                    origin = %dropped.origin.display(),
                    "manual section has no place in the new template and was dropped"
                );
            }
        }

        let signed = codec
            .sign(&merged.text, scheme)
            .map_err(|source| StampedError::MalformedMarker {
                path: target.clone(),
                source,
            })?;

        let outcome = match &previous {
            None => SaveOutcome::Create,
            Some(current) if *current == signed => SaveOutcome::None,
            Some(_) => SaveOutcome::Update,
        };

        let written = outcome.is_write() && !options.dry_run;
        if written {
            self.fs
                .write(&target, &signed)
                .map_err(|e| StampedError::Fs {
                    path: target.clone(),
                    message: e.to_string(),
                })?;
        }
        tracing::info!(
            target = %target.display(),
            %outcome,
            %scheme,
            dry_run = options.dry_run,
            "save finished"
        );

        Ok(SaveResult {
            path: target,
            outcome,
            scheme: Some(scheme),
            sections: merged.sections,
            dropped: merged.dropped,
            written,
            content: Some(signed),
            previous,
        })
    }

    /// Read legacy paths then the target, skipping ones that do not exist.
    ///
    /// Returns the blobs in priority order and the target's current content.
    fn load_priors(
        &self,
        request: &SaveRequest,
        target: &Path,
        exists: bool,
    ) -> StampedResult<(Vec<TextBlob>, Option<String>)> {
        let mut priors = Vec::with_capacity(request.legacy.len() + 1);

        for legacy in &request.legacy {
            let path = self.config.resolve_path(legacy);
            if path == target {
                continue;
            }
            if !self.fs.exists(&path) {
                tracing::debug!(path = %path.display(), "legacy source not found, skipping");
                continue;
            }
            let text = self.read(&path)?;
            priors.push(TextBlob::new(path, text));
        }

        let previous = if exists {
            let text = self.read(target)?;
            priors.push(TextBlob::new(target, text.as_str()));
            Some(text)
        } else {
            None
        };

        Ok((priors, previous))
    }

    fn read(&self, path: &Path) -> StampedResult<String> {
        self.fs.read(path).map_err(|e| StampedError::Fs {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Reject a prior source whose signature is missing or wrong
fn check_trusted(prior: &TextBlob) -> StampedResult<()> {
    let path = || PathBuf::from(prior.origin());
    match verify(prior.text()) {
        Verification::Valid { .. } => Ok(()),
        Verification::Unsigned => Err(StampedError::NoSignature { path: path() }),
        Verification::Invalid { .. } => Err(StampedError::BadSignature { path: path() }),
    }
}
