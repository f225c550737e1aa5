pub mod create_global_config;
pub mod create_project;
pub mod claim;
pub mod verify_legacy_claim;

pub use create_global_config::*;
pub use create_project::*;
pub use claim::*;
pub use verify_legacy_claim::*;
