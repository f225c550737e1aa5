pub mod authorization;
pub mod ed25519;
pub mod message;
pub mod token;
pub mod validation;

pub use authorization::*;
pub use ed25519::*;
pub use message::*;
pub use token::*;
pub use validation::*;
