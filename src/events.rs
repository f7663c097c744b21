//! Event types flowing between a host and the grid.
//!
//! Hosts push [`HostUpdate`] values whenever their dataset context
//! changes; the grid emits [`GridOutput`] values on its output channel
//! when it has something to report back. Both directions travel over
//! unbounded tokio mpsc channels and are processed one at a time by the
//! owning event loop, so the grid never sees two updates concurrently.

use crate::models::{Allocation, DatasetMeta, HighlightConfig, RowSet};

/// Which part of the host context changed in this push.
///
/// The host lists every property that changed since the previous push;
/// an empty list means a layout-only or spurious re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatedProperty {
    /// Records, paging, sorting, or filtering changed.
    Dataset,
    /// The host opened its full-screen presentation of the control.
    FullScreenOpen,
    /// The host closed its full-screen presentation.
    FullScreenClose,
    /// Allocated size changed.
    Layout,
    /// Configuration parameters (highlight value/color) changed.
    Parameters,
}

/// One push from the host: the changed-property list, the current page
/// of rows, and the dataset chrome taken fresh each cycle.
#[derive(Debug, Clone)]
pub struct HostUpdate<R> {
    pub updated: Vec<UpdatedProperty>,
    pub rows: RowSet<R>,
    pub meta: DatasetMeta,
    pub highlight: HighlightConfig,
    pub allocated: Allocation,
}

impl<R> HostUpdate<R> {
    /// A dataset-changed push with default chrome, useful as a starting
    /// point for hosts and tests.
    pub fn dataset(rows: RowSet<R>, meta: DatasetMeta) -> Self {
        HostUpdate {
            updated: vec![UpdatedProperty::Dataset],
            rows,
            meta,
            highlight: HighlightConfig::default(),
            allocated: Allocation::default(),
        }
    }

    pub fn changed(&self, property: UpdatedProperty) -> bool {
        self.updated.contains(&property)
    }
}

/// Messages the grid reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOutput {
    /// The number of visible rows changed since the last report.
    VisibleRowCount(usize),
}
