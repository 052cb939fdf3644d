//! Manual-section validation
//!
//! Guards blobs that are about to be trusted: a first-time partially
//! generated render (no prior version to merge against) or a file a user
//! asks to check. Broken markers are caught now rather than surfacing as an
//! unmergeable file on the next run.

use crate::domain::entities::{ManualSection, TextBlob};
use crate::domain::services::marker_scanner;
use crate::error::{StampedError, StampedResult};

/// Fail with `MalformedMarker` naming the blob's origin if any marker is broken
pub fn assert_valid_manual_sections(blob: &TextBlob) -> StampedResult<Vec<ManualSection>> {
    marker_scanner::scan(blob.text()).map_err(|source| StampedError::MalformedMarker {
        path: blob.origin().to_path_buf(),
        source,
    })
}
