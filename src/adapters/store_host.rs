//! Demo host: a [`DatasetHost`] over any [`RecordStore`].
//!
//! Reproduces how a real dataset host behaves from the grid's side of
//! the contract: every mutating call returns immediately, a query in
//! flight shows up as a loading push carrying the previous rows, and
//! the data push follows when the store answers. Query state
//! (page, sort, filter, selection, full-screen) lives behind one
//! mutex; fetches run as spawned tasks. A failed query is logged and
//! dropped without a push, which is exactly the indefinite-busy mode
//! the grid accepts.

use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::mpsc;

use crate::events::{HostUpdate, UpdatedProperty};
use crate::models::{
    Allocation, Column, DatasetMeta, FilterExpression, HighlightConfig, RecordRef, RowSet,
    SortStatus,
};
use crate::traits::{DatasetHost, PageQuery, RecordStore};

pub struct StoreHost<S: RecordStore> {
    inner: Arc<HostInner<S>>,
}

struct HostInner<S: RecordStore> {
    store: S,
    columns: Vec<Column>,
    page_size: u32,
    update_tx: mpsc::UnboundedSender<HostUpdate<S::Record>>,
    state: StdMutex<QueryState<S::Record>>,
}

struct QueryState<R> {
    page: u32,
    sorting: Vec<SortStatus>,
    filter: Option<FilterExpression>,
    selected: Vec<String>,
    full_screen: bool,
    allocated: Allocation,
    highlight: HighlightConfig,
    /// Queries currently in flight; the pushed loading flag is
    /// `in_flight > 0`.
    in_flight: u32,
    rows: Vec<R>,
    has_previous: bool,
    has_next: bool,
    last_opened: Option<RecordRef>,
}

impl<R> Default for QueryState<R> {
    fn default() -> Self {
        QueryState {
            page: 1,
            sorting: Vec::new(),
            filter: None,
            selected: Vec::new(),
            full_screen: false,
            allocated: Allocation::default(),
            highlight: HighlightConfig::default(),
            in_flight: 0,
            rows: Vec::new(),
            has_previous: false,
            has_next: false,
            last_opened: None,
        }
    }
}

impl<S: RecordStore> StoreHost<S> {
    pub fn new(
        store: S,
        columns: Vec<Column>,
        page_size: u32,
        update_tx: mpsc::UnboundedSender<HostUpdate<S::Record>>,
    ) -> Self {
        StoreHost {
            inner: Arc::new(HostInner {
                store,
                columns,
                page_size: page_size.max(1),
                update_tx,
                state: StdMutex::new(QueryState::default()),
            }),
        }
    }

    /// Configures the row-highlight parameters carried on every push.
    pub fn with_highlight(self, value: impl Into<String>, color: impl Into<String>) -> Self {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.highlight = HighlightConfig {
                value: Some(value.into()),
                color: Some(color.into()),
            };
        }
        self
    }

    /// Kicks off the initial query. The first push (loading, no rows)
    /// follows immediately.
    pub fn start(&self) {
        self.spawn_fetch();
    }

    /// Selection as last handed over by the grid.
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner.state.lock().unwrap().selected.clone()
    }

    /// Reference from the most recent open request.
    pub fn last_opened(&self) -> Option<RecordRef> {
        self.inner.state.lock().unwrap().last_opened.clone()
    }

    pub fn is_full_screen(&self) -> bool {
        self.inner.state.lock().unwrap().full_screen
    }

    fn push_update(inner: &HostInner<S>, updated: Vec<UpdatedProperty>) {
        let update = {
            let state = inner.state.lock().unwrap();
            HostUpdate {
                updated,
                rows: RowSet::from_page(state.rows.clone()),
                meta: DatasetMeta {
                    columns: inner.columns.clone(),
                    loading: state.in_flight > 0,
                    has_previous_page: state.has_previous,
                    has_next_page: state.has_next,
                    sorting: state.sorting.clone(),
                    filter: state.filter.clone(),
                },
                highlight: state.highlight.clone(),
                allocated: state.allocated,
            }
        };
        if inner.update_tx.send(update).is_err() {
            tracing::debug!("update channel closed, dropping push");
        }
    }

    fn spawn_fetch(&self) {
        // Host methods stay callable without a runtime (sync tests);
        // the query is simply not run.
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::debug!("no tokio runtime, skipping query");
            return;
        }

        let inner = Arc::clone(&self.inner);
        let query = {
            let mut state = inner.state.lock().unwrap();
            state.in_flight += 1;
            PageQuery {
                page: state.page,
                page_size: inner.page_size,
                sorting: state.sorting.clone(),
                filter: state.filter.clone(),
            }
        };
        Self::push_update(&inner, vec![UpdatedProperty::Dataset]);

        tokio::spawn(async move {
            match inner.store.fetch_page(&query).await {
                Ok(slice) => {
                    {
                        let mut state = inner.state.lock().unwrap();
                        state.in_flight -= 1;
                        state.rows = slice.records;
                        state.page = slice.page;
                        state.has_previous = slice.has_previous;
                        state.has_next = slice.has_next;
                    }
                    Self::push_update(&inner, vec![UpdatedProperty::Dataset]);
                }
                Err(error) => {
                    // No push on failure; the grid keeps its overlay
                    // until a later query succeeds.
                    tracing::warn!(%error, "page query failed");
                    let mut state = inner.state.lock().unwrap();
                    state.in_flight -= 1;
                }
            }
        });
    }
}

impl<S: RecordStore> Clone for StoreHost<S> {
    fn clone(&self) -> Self {
        StoreHost {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RecordStore> DatasetHost for StoreHost<S> {
    type Record = S::Record;

    fn set_sort(&self, sorting: Vec<SortStatus>) {
        self.inner.state.lock().unwrap().sorting = sorting;
    }

    fn set_filter(&self, filter: FilterExpression) {
        self.inner.state.lock().unwrap().filter = Some(filter);
    }

    fn clear_filter(&self) {
        self.inner.state.lock().unwrap().filter = None;
    }

    fn refresh(&self) {
        // A changed query starts over from the first page, which is
        // what lets the grid's page-reset rule fire on the way back.
        self.inner.state.lock().unwrap().page = 1;
        self.spawn_fetch();
    }

    fn load_exact_page(&self, page: u32) {
        self.inner.state.lock().unwrap().page = page.max(1);
        self.spawn_fetch();
    }

    fn open_item(&self, reference: &RecordRef) {
        tracing::info!(entity = %reference.entity, id = %reference.id, "open requested");
        self.inner.state.lock().unwrap().last_opened = Some(reference.clone());
    }

    fn set_selected(&self, ids: Vec<String>) {
        self.inner.state.lock().unwrap().selected = ids;
    }

    fn set_full_screen(&self, on: bool) {
        self.inner.state.lock().unwrap().full_screen = on;
        let signal = if on {
            UpdatedProperty::FullScreenOpen
        } else {
            UpdatedProperty::FullScreenClose
        };
        Self::push_update(&self.inner, vec![signal]);
    }

    fn set_allocated_size(&self, width: u16, height: u16) {
        self.inner.state.lock().unwrap().allocated = Allocation { width, height };
        Self::push_update(&self.inner, vec![UpdatedProperty::Layout]);
    }
}
