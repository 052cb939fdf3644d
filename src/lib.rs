//! Stamped - signed source regeneration
//!
//! Stamped signs generated files with an embedded hash and regenerates them
//! without losing code written by hand inside marked manual sections.
//! Files edited outside those sections are refused rather than overwritten.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{SaveOptions, SaveRequest, SaveResult, SaveUseCase};
pub use config::Config;
pub use domain::entities::{ManualSection, RekeyMap, TextBlob};
pub use domain::services::{merge, scan, verify, SignatureCodec, Verification};
pub use domain::value_objects::{HeaderStyle, SaveOutcome, SigningScheme};
pub use error::{StampedError, StampedResult};
