//! Common test utilities for integration tests.
//!
//! Fixtures build small account datasets and wire a [`GridController`]
//! to the recording [`MockHost`], so tests can drive host pushes by
//! hand and assert on the exact host traffic a command produced.

// Each test binary uses its own slice of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use gridlet::adapters::{JsonRecord, MockHost};
use gridlet::events::{GridOutput, HostUpdate};
use gridlet::grid::{GridController, GridOptions};
use gridlet::models::{Column, DatasetMeta, RowSet};

/// A grid wired to a recording mock host.
pub struct TestGrid {
    pub controller: GridController<MockHost>,
    pub host: MockHost,
    pub outputs: mpsc::UnboundedReceiver<GridOutput>,
}

/// Builds a controller attached to a fresh [`MockHost`].
pub fn test_grid() -> TestGrid {
    test_grid_with(GridOptions::default())
}

pub fn test_grid_with(options: GridOptions) -> TestGrid {
    let host = MockHost::new();
    let (output_tx, outputs) = mpsc::unbounded_channel();
    let controller = GridController::new(Arc::new(host.clone()), output_tx, options);
    TestGrid {
        controller,
        host,
        outputs,
    }
}

/// Two-column account layout used across tests.
pub fn account_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", 0),
        Column::new("city", "City", 1),
    ]
}

pub fn account(id: &str, name: &str, city: &str) -> JsonRecord {
    JsonRecord::new(id, "account", json!({ "name": name, "city": city }))
}

/// `count` records with predictable ids `row-0`, `row-1`, ...
pub fn account_page(count: usize) -> RowSet<JsonRecord> {
    RowSet::from_page(
        (0..count)
            .map(|i| account(&format!("row-{i}"), &format!("Account {i}"), "Oslo"))
            .collect(),
    )
}

/// A settled (not loading) first-page dataset push.
pub fn settled_page(count: usize) -> HostUpdate<JsonRecord> {
    let meta = DatasetMeta {
        columns: account_columns(),
        ..DatasetMeta::default()
    };
    HostUpdate::dataset(account_page(count), meta)
}

/// Drains every queued output without blocking.
pub fn drain_outputs(rx: &mut mpsc::UnboundedReceiver<GridOutput>) -> Vec<GridOutput> {
    let mut outputs = Vec::new();
    while let Ok(output) = rx.try_recv() {
        outputs.push(output);
    }
    outputs
}
