pub mod navigate;
pub mod routes;
pub mod toast;
