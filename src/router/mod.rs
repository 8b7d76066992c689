// Routing collaborator: the route table and the guard that consults the
// session, the toast queue and the modal orchestrator

pub mod guard;
pub mod routes;

pub use guard::*;
pub use routes::*;
