//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SaveUseCase` - Regenerates one signed file (load, verify, merge, sign, write)
//! - `VerifyUseCase` - Batch signature verification
//! - `CheckUseCase` - Manual-section marker validation

pub mod check;
pub mod save;
pub mod verify;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use save::{SaveOptions, SaveRequest, SaveResult, SaveUseCase};
pub use verify::{VerifyItem, VerifyOptions, VerifyResult, VerifyUseCase};
