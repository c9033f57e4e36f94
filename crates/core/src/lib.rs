//! Domain core for the to-do service.
//!
//! Holds the pieces shared by the storage and HTTP layers: identifier and
//! timestamp aliases, the domain error type, the to-do status state machine
//! and the clock abstraction. This crate has no internal workspace deps.

pub mod clock;
pub mod error;
pub mod status;
pub mod todo;
pub mod types;
