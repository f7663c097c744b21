//! Concrete implementations of the host-boundary traits.
//!
//! Production adapters live here; test doubles live in [`mock`]. The
//! grid core never names any of these types, it only sees the traits.
//!
//! # Adapters
//!
//! - [`JsonRecord`] - record over a JSON field map
//! - [`SampleStore`] - in-memory record store with query semantics
//! - [`StoreHost`] - dataset host bridging a store to update pushes
//! - [`EmbeddedResources`] - built-in English string table
//!
//! # Mock Implementations
//!
//! - [`mock::MockHost`] - dataset host recording every call
//! - [`mock::ScriptedStore`] - store answering from a prepared queue

pub mod embedded_resources;
pub mod json_record;
pub mod mock;
pub mod sample_store;
pub mod store_host;

pub use embedded_resources::EmbeddedResources;
pub use json_record::JsonRecord;
pub use mock::{HostCall, MockHost, ScriptedStore};
pub use sample_store::{sample_columns, DatasetFile, SampleStore};
pub use store_host::StoreHost;
