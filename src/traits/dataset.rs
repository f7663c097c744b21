//! Host dataset contract.
//!
//! [`DatasetHost`] is the seam between the grid and whatever owns the
//! data. Every method is fire-and-forget: calls return immediately and
//! their effects surface only as later [`HostUpdate`] pushes, so the
//! grid never blocks on the host and never observes a call failing.
//!
//! [`HostUpdate`]: crate::events::HostUpdate

use crate::models::{FilterExpression, RecordRef, SortStatus};

/// A host-owned record as the grid sees it: an id, formatted values by
/// column name, raw values for predicates, and an opaque reference used
/// for navigation.
pub trait GridRecord: Clone + Send + Sync + 'static {
    fn record_id(&self) -> &str;

    /// Display string for a column, if the record has one.
    fn formatted_value(&self, column: &str) -> Option<String>;

    /// Raw field value for predicates such as row highlighting.
    fn raw_value(&self, column: &str) -> Option<serde_json::Value>;

    /// Navigable reference forwarded to the host when the row is opened.
    fn reference(&self) -> RecordRef;
}

/// The dataset operations a host exposes to the grid.
///
/// Implementations must tolerate redundant calls (e.g. `clear_filter`
/// with no filter set) and are free to clamp or reject out-of-range
/// page requests.
pub trait DatasetHost: Send + Sync + 'static {
    type Record: GridRecord;

    /// Replaces the dataset sort specification.
    fn set_sort(&self, sorting: Vec<SortStatus>);

    /// Replaces the dataset filter wholesale.
    fn set_filter(&self, filter: FilterExpression);

    /// Removes any filter.
    fn clear_filter(&self);

    /// Re-runs the current query; results arrive as a later push.
    fn refresh(&self);

    /// Loads the given 1-based page; results arrive as a later push.
    fn load_exact_page(&self, page: u32);

    /// Opens the record behind the reference in the host's own UI.
    fn open_item(&self, reference: &RecordRef);

    /// Replaces the selected-record id set.
    fn set_selected(&self, ids: Vec<String>);

    /// Asks the host to open or close its full-screen presentation.
    /// The grid's own flag follows the host's later signal, never this
    /// call.
    fn set_full_screen(&self, on: bool);

    /// Informs the host of the area currently available to the control.
    fn set_allocated_size(&self, width: u16, height: u16);
}
