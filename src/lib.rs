pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod modal;
pub mod router;
pub mod toast;
pub mod types;

pub use context::UiContext;
pub use error::UiError;

#[cfg(test)]
pub mod testing;
