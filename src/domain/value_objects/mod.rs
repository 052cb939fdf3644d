//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod hash;
mod header_style;
mod save_outcome;
mod scheme;

pub use config_warning::ConfigWarning;
pub use hash::SignatureHash;
pub use header_style::HeaderStyle;
pub use save_outcome::SaveOutcome;
pub use scheme::SigningScheme;
