//! Domain Services
//!
//! Pure logic over text blobs: marker scanning, signing, merging and
//! validation. Nothing here touches the file system.

pub mod marker_scanner;
mod merge_engine;
pub mod signature_codec;
mod validation;

pub use marker_scanner::{scan, MarkerError, MarkerErrorKind};
pub use merge_engine::{
    merge, orphaned_sections, DroppedSection, MergeError, MergeResult, Resolution, ResolvedSection,
};
pub use signature_codec::{
    find_slot, verify, SignatureCodec, SignatureSlot, Verification, DEFAULT_HEADER_MESSAGE,
    SIGNATURE_PLACEHOLDER,
};
pub use validation::assert_valid_manual_sections;
