//! Domain Ports
//!
//! Interfaces the domain and application layers depend on; infrastructure
//! provides the implementations.

pub mod file_system;

pub use file_system::{FileSystem, FsError, FsResult};

#[cfg(test)]
pub use file_system::MockFileSystem;
