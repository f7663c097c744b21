//! Mock dataset host for tests.
//!
//! Records every call the grid makes so tests can assert on the exact
//! host traffic a command produced. Pushes are driven by the test
//! itself through [`GridController::handle_update`], so the mock never
//! needs a channel of its own.
//!
//! [`GridController::handle_update`]: crate::grid::GridController::handle_update

use std::sync::{Arc, Mutex as StdMutex};

use crate::adapters::json_record::JsonRecord;
use crate::models::{FilterExpression, RecordRef, SortStatus};
use crate::traits::DatasetHost;

/// One recorded host call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetSort(Vec<SortStatus>),
    SetFilter(FilterExpression),
    ClearFilter,
    Refresh,
    LoadExactPage(u32),
    OpenItem(RecordRef),
    SetSelected(Vec<String>),
    SetFullScreen(bool),
    SetAllocatedSize(u16, u16),
}

#[derive(Clone, Default)]
pub struct MockHost {
    calls: Arc<StdMutex<Vec<HostCall>>>,
}

impl MockHost {
    pub fn new() -> Self {
        MockHost::default()
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drains the recorded calls, so follow-up assertions start clean.
    pub fn take_calls(&self) -> Vec<HostCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DatasetHost for MockHost {
    type Record = JsonRecord;

    fn set_sort(&self, sorting: Vec<SortStatus>) {
        self.record(HostCall::SetSort(sorting));
    }

    fn set_filter(&self, filter: FilterExpression) {
        self.record(HostCall::SetFilter(filter));
    }

    fn clear_filter(&self) {
        self.record(HostCall::ClearFilter);
    }

    fn refresh(&self) {
        self.record(HostCall::Refresh);
    }

    fn load_exact_page(&self, page: u32) {
        self.record(HostCall::LoadExactPage(page));
    }

    fn open_item(&self, reference: &RecordRef) {
        self.record(HostCall::OpenItem(reference.clone()));
    }

    fn set_selected(&self, ids: Vec<String>) {
        self.record(HostCall::SetSelected(ids));
    }

    fn set_full_screen(&self, on: bool) {
        self.record(HostCall::SetFullScreen(on));
    }

    fn set_allocated_size(&self, width: u16, height: u16) {
        self.record(HostCall::SetAllocatedSize(width, height));
    }
}
