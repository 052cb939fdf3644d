//! Domain Entities
//!
//! Core business objects of the regeneration pipeline.

mod manual_section;
mod rekey_map;
mod text_blob;

pub use manual_section::ManualSection;
pub use rekey_map::RekeyMap;
pub use text_blob::TextBlob;
