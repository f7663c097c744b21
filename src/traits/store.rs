//! Record store abstraction used by host adapters.
//!
//! A [`RecordStore`] answers page queries: given sort, filter, and a
//! 1-based page number it returns one page of records plus paging
//! flags. Host adapters sit between a store and the grid, turning
//! store answers into pushes. Keeping the store behind a trait lets
//! tests swap in instant in-memory stores and lets the demo simulate
//! query latency.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FilterExpression, SortStatus};
use crate::traits::GridRecord;

/// One page request against a store.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    /// 1-based page number; stores clamp out-of-range values.
    pub page: u32,
    pub page_size: u32,
    pub sorting: Vec<SortStatus>,
    pub filter: Option<FilterExpression>,
}

impl PageQuery {
    pub fn first_page(page_size: u32) -> Self {
        PageQuery {
            page: 1,
            page_size,
            sorting: Vec::new(),
            filter: None,
        }
    }
}

/// One page of results, already in display order.
#[derive(Debug, Clone)]
pub struct PageSlice<R> {
    pub records: Vec<R>,
    /// The page actually served, after any clamping.
    pub page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// Total records matching the query, when the store knows it.
    pub total: Option<usize>,
}

/// Errors a store can produce while answering a query.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown column in query: {0}")]
    UnknownColumn(String),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Async source of record pages.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    type Record: GridRecord;

    async fn fetch_page(&self, query: &PageQuery) -> Result<PageSlice<Self::Record>, StoreError>;
}
