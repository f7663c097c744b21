//! The control-level state machine.
//!
//! One [`GridController`] exists per grid instance. It owns the only
//! mutable state the control has: current page number, full-screen
//! flag, the retained row snapshot, the last-notified visible-row
//! count, the pending-operation flag, and the selection. Host pushes
//! and user commands arrive as serialized events; each handler mutates
//! this state and forwards intents to the host, and nothing here ever
//! blocks or fails.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::events::{GridOutput, HostUpdate, UpdatedProperty};
use crate::models::{
    Allocation, ConditionExpression, DatasetMeta, FilterExpression, HighlightConfig, RecordRef,
    RowSet, SortDirection, SortStatus,
};
use crate::traits::{DatasetHost, GridRecord, Resources};

use super::view::{self, GridViewModel};

/// Page navigation targets exposed by the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
}

/// Construction-time options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Refresh the row snapshot on every push, even when the host did
    /// not flag the dataset as changed. Diagnostic hosts that cannot
    /// report changed properties reliably run with this set.
    pub refresh_on_every_update: bool,
}

/// State machine for one grid instance.
pub struct GridController<H: DatasetHost> {
    host: Arc<H>,
    outputs: mpsc::UnboundedSender<GridOutput>,
    options: GridOptions,
    current_page: u32,
    full_screen: bool,
    snapshot: Option<RowSet<H::Record>>,
    meta: DatasetMeta,
    highlight: HighlightConfig,
    allocated: Allocation,
    last_reported_count: Option<usize>,
    pending_action: bool,
    selected: Option<String>,
}

impl<H: DatasetHost> GridController<H> {
    pub fn new(
        host: Arc<H>,
        outputs: mpsc::UnboundedSender<GridOutput>,
        options: GridOptions,
    ) -> Self {
        GridController {
            host,
            outputs,
            options,
            current_page: 1,
            full_screen: false,
            snapshot: None,
            meta: DatasetMeta::default(),
            highlight: HighlightConfig::default(),
            allocated: Allocation::default(),
            last_reported_count: None,
            pending_action: false,
            selected: None,
        }
    }

    /// Absorbs one host push.
    ///
    /// Applies the full-screen signals (close before open, so a cycle
    /// carrying both lands on open), resets pagination when a reset
    /// dataset arrives while we sit on a later page, refreshes the row
    /// snapshot when the dataset changed, and reports the visible-row
    /// count if it differs from the last reported value.
    pub fn handle_update(&mut self, update: HostUpdate<H::Record>) {
        let dataset_changed = update.changed(UpdatedProperty::Dataset);

        if update.changed(UpdatedProperty::FullScreenClose) {
            self.full_screen = false;
        }
        if update.changed(UpdatedProperty::FullScreenOpen) {
            self.full_screen = true;
        }

        let reset_paging = dataset_changed
            && !update.meta.loading
            && !update.meta.has_previous_page
            && self.current_page != 1;
        if reset_paging {
            tracing::debug!(from = self.current_page, "dataset reset, back to page 1");
            self.current_page = 1;
        }

        if reset_paging
            || dataset_changed
            || self.options.refresh_on_every_update
            || self.snapshot.is_none()
        {
            self.snapshot = Some(update.rows);
            // A fresh row list answers whatever action was pending.
            self.pending_action = false;
        }

        self.meta = update.meta;
        self.highlight = update.highlight;
        self.allocated = update.allocated;

        let visible = self.visible_rows();
        if self.last_reported_count != Some(visible) {
            tracing::debug!(count = visible, "visible row count changed");
            let _ = self.outputs.send(GridOutput::VisibleRowCount(visible));
            self.last_reported_count = Some(visible);
        }
    }

    /// Replaces the sort spec with a single column sort and refreshes.
    pub fn sort_by(&mut self, column: &str, descending: bool) {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        tracing::debug!(column, ?direction, "sort requested");
        self.host.set_sort(vec![SortStatus {
            name: column.to_string(),
            direction,
        }]);
        self.host.refresh();
        self.pending_action = true;
    }

    /// Enables or disables the missing-data filter for a column.
    ///
    /// Enabling writes a filter with exactly that one condition;
    /// disabling clears the filter wholesale, whatever it held.
    pub fn filter_empty(&mut self, column: &str, enable: bool) {
        if enable {
            self.host.set_filter(FilterExpression::single(
                ConditionExpression::does_not_contain_data(column),
            ));
        } else {
            self.host.clear_filter();
        }
        self.host.refresh();
        self.pending_action = true;
    }

    /// Applies a substring search on one column, or clears the filter
    /// when the query is blank. The query is lowercased before it is
    /// handed to the host.
    pub fn search(&mut self, column: &str, query: &str) {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            self.host.clear_filter();
        } else {
            self.host
                .set_filter(FilterExpression::single(ConditionExpression::like(
                    column, query,
                )));
        }
        self.host.refresh();
        self.pending_action = true;
    }

    /// Navigates to another page. No bound checks beyond what the
    /// footer's enablement already prevents; the host clamps or
    /// rejects out-of-range pages.
    pub fn load_page(&mut self, target: PageTarget) {
        self.current_page = match target {
            PageTarget::First => 1,
            PageTarget::Previous => self.current_page.saturating_sub(1),
            PageTarget::Next => self.current_page + 1,
        };
        tracing::debug!(page = self.current_page, "page load requested");
        self.host.load_exact_page(self.current_page);
        self.pending_action = true;
    }

    /// Asks the host for its full-screen presentation. The local flag
    /// only changes when the host's open signal comes back.
    pub fn open_full_screen(&self) {
        self.host.set_full_screen(true);
    }

    pub fn close_full_screen(&self) {
        self.host.set_full_screen(false);
    }

    /// Forwards the allocated render area to the host.
    pub fn resize(&self, width: u16, height: u16) {
        self.host.set_allocated_size(width, height);
    }

    /// Selects the row at a visual index, replacing any prior
    /// selection; toggling the already-selected row deselects. The id
    /// set reaches the host synchronously.
    pub fn toggle_select(&mut self, index: usize) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let Some(id) = snapshot.id_at(index) else {
            return;
        };
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            self.host.set_selected(Vec::new());
        } else {
            let id = id.to_string();
            self.host.set_selected(vec![id.clone()]);
            self.selected = Some(id);
        }
    }

    /// Opens the record at a visual index in the host's UI. Returns
    /// the forwarded reference, or `None` when no record sits at that
    /// index (missing ids render as placeholders and cannot open).
    pub fn open_row(&self, index: usize) -> Option<RecordRef> {
        let record = self.snapshot.as_ref()?.record_at(index)?;
        let reference = record.reference();
        self.host.open_item(&reference);
        Some(reference)
    }

    /// Builds the renderable page model from the current state.
    pub fn view_model(&self, resources: &dyn Resources) -> GridViewModel {
        let columns = view::visible_columns(
            &self.meta.columns,
            &self.meta.sorting,
            self.meta.filter.as_ref(),
        );
        let rows = match &self.snapshot {
            Some(snapshot) => {
                view::page_rows(snapshot, &columns, &self.highlight, self.selected.as_deref())
            }
            None => Vec::new(),
        };
        let busy = self.is_busy();
        let pager = view::pager(
            &self.meta,
            self.current_page,
            self.selected_count(),
            busy,
            self.full_screen,
            resources,
        );
        GridViewModel {
            columns,
            rows,
            busy,
            pager,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Busy while the host reports loading, a user action is still
    /// waiting for fresh rows, or no push has arrived yet.
    pub fn is_busy(&self) -> bool {
        self.meta.loading || self.pending_action || self.snapshot.is_none()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_action
    }

    pub fn visible_rows(&self) -> usize {
        self.snapshot.as_ref().map_or(0, RowSet::len)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_count(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    pub fn snapshot(&self) -> Option<&RowSet<H::Record>> {
        self.snapshot.as_ref()
    }

    pub fn meta(&self) -> &DatasetMeta {
        &self.meta
    }

    pub fn allocated(&self) -> Allocation {
        self.allocated
    }

    /// Record behind a visual row index, if present in the snapshot.
    pub fn record_at(&self, index: usize) -> Option<&H::Record> {
        self.snapshot.as_ref()?.record_at(index)
    }
}
