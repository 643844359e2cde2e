// Library root: the router and handlers live here so integration tests can
// drive the service in-process.

pub mod app;
pub mod error;
pub mod handlers;
