//! To-do API server library.
//!
//! Exposes the building blocks (config, state, error handling, the to-do
//! service, the past-due sweep, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod background;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
