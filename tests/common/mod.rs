//! Common test utilities for Stamped CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_signed!`
//! - Fixtures: Reusable template constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod isolation;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
