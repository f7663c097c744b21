//! Pure derivation of the renderable page model.
//!
//! Everything here is a function from immutable state to data; no
//! host calls, no mutation, no async. The controller composes these
//! into a [`GridViewModel`] once per render cycle and the ui module
//! draws it. Rows are never re-sorted client side: the host's id
//! order is the row order.

use ratatui::style::Color;

use crate::models::{
    Column, DatasetMeta, FilterExpression, HighlightConfig, RowSet, SortDirection, SortStatus,
};
use crate::traits::resources::keys;
use crate::traits::{GridRecord, Resources};

use super::highlight;

/// A visible column with its derived sort/filter annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    /// Logical name, used when issuing sort/filter requests.
    pub name: String,
    pub display_name: String,
    pub sortable: bool,
    /// Present when the current sort spec includes this column.
    pub sorted: Option<SortDirection>,
    /// True when the current filter has a condition on this column.
    pub filtered: bool,
    /// Relative width weight for layout.
    pub weight: u16,
}

/// One renderable row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Row id; `None` for placeholder rows whose id did not resolve.
    pub id: Option<String>,
    /// Formatted cell per visible column, in column order.
    pub cells: Vec<String>,
    /// Background override from the highlight rule.
    pub highlight: Option<Color>,
    pub selected: bool,
}

/// Footer chrome: page position, navigation enablement, labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerModel {
    pub page: u32,
    pub first_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub footer_text: String,
    /// Label for the full-screen action; absent while already full
    /// screen.
    pub full_screen_label: Option<String>,
}

/// The complete renderable page.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewModel {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
    /// Drives the loading overlay.
    pub busy: bool,
    pub pager: PagerModel,
}

impl GridViewModel {
    /// An empty model, rendered before the first host push arrives.
    pub fn empty() -> Self {
        GridViewModel {
            columns: Vec::new(),
            rows: Vec::new(),
            busy: true,
            pager: PagerModel {
                page: 1,
                first_enabled: false,
                previous_enabled: false,
                next_enabled: false,
                footer_text: String::new(),
                full_screen_label: None,
            },
        }
    }
}

/// Derives the visible column list: hidden and negative-order columns
/// drop out, the rest sort ascending by `order` (stable on ties) and
/// pick up their sort/filter annotation.
pub fn visible_columns(
    columns: &[Column],
    sorting: &[SortStatus],
    filter: Option<&FilterExpression>,
) -> Vec<ColumnHeader> {
    let mut visible: Vec<&Column> = columns
        .iter()
        .filter(|c| !c.is_hidden && c.order >= 0)
        .collect();
    visible.sort_by_key(|c| c.order);
    visible
        .into_iter()
        .map(|c| ColumnHeader {
            name: c.name.clone(),
            display_name: c.display_name.clone(),
            sortable: c.sortable,
            sorted: sorting
                .iter()
                .find(|s| s.name == c.name)
                .map(|s| s.direction),
            filtered: filter.is_some_and(|f| f.targets(&c.name)),
            weight: c.visual_size_factor.unwrap_or(1).max(1),
        })
        .collect()
}

/// Projects the snapshot's id order through its record map. Ids with
/// no record become blank placeholder rows rather than being skipped,
/// so row indices stay aligned with the host's order.
pub fn page_rows<R: GridRecord>(
    rows: &RowSet<R>,
    columns: &[ColumnHeader],
    highlight: &HighlightConfig,
    selected: Option<&str>,
) -> Vec<RowView> {
    rows.row_order
        .iter()
        .map(|id| match rows.records.get(id) {
            Some(record) => RowView {
                id: Some(id.clone()),
                cells: columns
                    .iter()
                    .map(|c| record.formatted_value(&c.name).unwrap_or_default())
                    .collect(),
                highlight: highlight::row_highlight(record, highlight),
                selected: selected == Some(id.as_str()),
            },
            None => RowView {
                id: None,
                cells: vec![String::new(); columns.len()],
                highlight: None,
                selected: false,
            },
        })
        .collect()
}

/// Builds the footer chrome. Navigation enablement follows the host's
/// paging flags and goes dark while busy; the full-screen action only
/// shows when not already full screen.
pub fn pager(
    meta: &DatasetMeta,
    page: u32,
    selected_count: usize,
    busy: bool,
    full_screen: bool,
    resources: &dyn Resources,
) -> PagerModel {
    PagerModel {
        page,
        first_enabled: meta.has_previous_page && !busy,
        previous_enabled: meta.has_previous_page && !busy,
        next_enabled: meta.has_next_page && !busy,
        footer_text: resources.string_format(
            keys::GRID_FOOTER,
            &[&page.to_string(), &selected_count.to_string()],
        ),
        full_screen_label: (!full_screen).then(|| resources.string(keys::SHOW_FULL_SCREEN)),
    }
}
