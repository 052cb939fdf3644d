//! Domain Layer
//!
//! Pure logic for signed regeneration, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (TextBlob, ManualSection, RekeyMap)
//! - `value_objects/` - Immutable value types (SigningScheme, SignatureHash, SaveOutcome)
//! - `services/` - Marker scanner, signature codec, merge engine, validation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Text, not syntax** - Sections are spans over opaque text, never an AST
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
