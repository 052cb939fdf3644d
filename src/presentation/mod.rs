//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//! - Logging setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber initialization
//! - `output` - Output rendering abstractions

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_check_use_case, create_save_use_case, create_verify_use_case};
pub use output::{create_renderer, OutputFormat, ResultRenderer};
