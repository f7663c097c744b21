//! Scripted record store for host adapter tests.
//!
//! Answers fetches from a queue of prepared results, so tests control
//! exactly what each query returns, including errors. An exhausted
//! queue serves empty single pages.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;

use crate::adapters::json_record::JsonRecord;
use crate::traits::{PageQuery, PageSlice, RecordStore, StoreError};

type ScriptedResult = Result<PageSlice<JsonRecord>, StoreError>;

#[derive(Clone, Default)]
pub struct ScriptedStore {
    responses: Arc<StdMutex<VecDeque<ScriptedResult>>>,
    queries: Arc<StdMutex<Vec<PageQuery>>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        ScriptedStore::default()
    }

    /// Queues the result for the next unanswered fetch.
    pub fn push_result(&self, result: ScriptedResult) {
        self.responses.lock().unwrap().push_back(result);
    }

    /// Queries seen so far, in arrival order.
    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for ScriptedStore {
    type Record = JsonRecord;

    async fn fetch_page(&self, query: &PageQuery) -> Result<PageSlice<JsonRecord>, StoreError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(PageSlice {
                records: Vec::new(),
                page: 1,
                has_previous: false,
                has_next: false,
                total: Some(0),
            }),
        }
    }
}
