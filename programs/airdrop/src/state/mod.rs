pub mod global_config;
pub mod project;
pub mod claim_nullifier;

pub use global_config::*;
pub use project::*;
pub use claim_nullifier::*;
