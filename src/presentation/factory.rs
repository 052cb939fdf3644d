//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::{CheckUseCase, SaveUseCase, VerifyUseCase};
use crate::config::Config;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete SaveUseCase
pub type ConcreteSaveUseCase = SaveUseCase<LocalFs>;

/// Create a save use case writing to the local disk
pub fn create_save_use_case(config: Config) -> ConcreteSaveUseCase {
    SaveUseCase::new(LocalFs::new(), config)
}

/// Create a verify use case reading from the local disk
pub fn create_verify_use_case() -> VerifyUseCase<LocalFs> {
    VerifyUseCase::new(LocalFs::new())
}

/// Create a check use case reading from the local disk
pub fn create_check_use_case() -> CheckUseCase<LocalFs> {
    CheckUseCase::new(LocalFs::new())
}
