//! Save Use Case
//!
//! Orchestrates regeneration of one signed file.
//!
//! This module handles:
//! - Loading prior versions (legacy paths, then the target itself)
//! - Verifying their signatures unless clobbering
//! - Merging manual sections into the fresh render
//! - Signing and writing only when the bytes changed

mod options;
mod result;
mod use_case;

pub use options::{SaveOptions, SaveRequest};
pub use result::SaveResult;
pub use use_case::SaveUseCase;
