//! Gridlet - a paged, sortable, filterable record grid for terminal UIs
//!
//! The grid mirrors a remote dataset owned by a host: every command (sort,
//! filter, paging, selection) is forwarded to the host, and the visible rows
//! change only when the host pushes an updated snapshot back.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod events;
pub mod grid;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
