// Modal orchestration: an id-keyed service with awaitable decisions and a
// simpler name-keyed stack

pub mod callbacks;
pub mod content;
pub mod error;
pub mod pending;
pub mod responder;
pub mod service;
pub mod stack;

// Re-export core types
pub use callbacks::*;
pub use content::*;
pub use error::*;
pub use pending::*;
pub use responder::*;
pub use service::*;
pub use stack::*;
