//! Mock implementations for testing.
//!
//! Test doubles for the host-boundary traits, compiled into the
//! library so integration tests and downstream users can drive a grid
//! without a real host.
//!
//! # Available Mocks
//!
//! - [`MockHost`] - dataset host recording every call
//! - [`ScriptedStore`] - record store answering from a prepared queue

pub mod host;
pub mod store;

pub use host::{HostCall, MockHost};
pub use store::ScriptedStore;
