//! Trait abstractions for the host boundary.
//!
//! The grid core talks to the outside world only through these traits,
//! so hosts, stores, and string tables can all be swapped or mocked.
//!
//! # Traits
//!
//! - [`DatasetHost`] - dataset operations a host exposes to the grid
//! - [`GridRecord`] - record contract (id, values, navigable reference)
//! - [`RecordStore`] - async page source behind host adapters
//! - [`Resources`] - localized string lookup

pub mod dataset;
pub mod resources;
pub mod store;

pub use dataset::{DatasetHost, GridRecord};
pub use resources::{format_template, Resources};
pub use store::{PageQuery, PageSlice, RecordStore, StoreError};
