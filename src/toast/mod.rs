// Toast notification queue

pub mod notify;
pub mod queue;

pub use queue::*;
