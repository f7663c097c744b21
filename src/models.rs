//! Dataset vocabulary shared between the grid core and host adapters.
//!
//! These are the value types that cross the host boundary: column
//! descriptors, sort and filter expressions, record references, and the
//! row set carried by each host push. The grid never mutates any of
//! them; hosts own the data and the grid owns only its local snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Platform wire code (ascending = 0, descending = 1).
    pub fn code(&self) -> u8 {
        match self {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

/// One entry of a dataset sort specification.
///
/// The grid only ever writes specs with at most one entry; hosts may
/// hand richer specs back through pushes and the view annotates columns
/// from whatever it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStatus {
    /// Logical column name the sort applies to.
    pub name: String,
    pub direction: SortDirection,
}

impl SortStatus {
    pub fn ascending(name: impl Into<String>) -> Self {
        SortStatus {
            name: name.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(name: impl Into<String>) -> Self {
        SortStatus {
            name: name.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Condition operators the grid knows how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equal,
    /// Substring match against the formatted value.
    Like,
    /// Field is null, absent, or empty.
    DoesNotContainData,
}

impl FilterOperator {
    /// Platform condition-operator code (Equal = 0, Like = 6,
    /// DoesNotContainData = 12).
    pub fn code(&self) -> u8 {
        match self {
            FilterOperator::Equal => 0,
            FilterOperator::Like => 6,
            FilterOperator::DoesNotContainData => 12,
        }
    }
}

/// A single filter condition on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionExpression {
    /// Logical column name the condition applies to.
    pub attribute: String,
    pub operator: FilterOperator,
    /// Comparison value; `None` for operators that take no argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ConditionExpression {
    /// Condition matching records whose field holds no data.
    pub fn does_not_contain_data(attribute: impl Into<String>) -> Self {
        ConditionExpression {
            attribute: attribute.into(),
            operator: FilterOperator::DoesNotContainData,
            value: None,
        }
    }

    /// Substring condition; the pattern is matched case-insensitively.
    pub fn like(attribute: impl Into<String>, pattern: impl Into<String>) -> Self {
        ConditionExpression {
            attribute: attribute.into(),
            operator: FilterOperator::Like,
            value: Some(pattern.into()),
        }
    }
}

/// Dataset filter: a flat list of conditions.
///
/// The grid itself writes at most one condition and clears wholesale;
/// there is no and/or composition at this level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterExpression {
    pub conditions: Vec<ConditionExpression>,
}

impl FilterExpression {
    pub fn single(condition: ConditionExpression) -> Self {
        FilterExpression {
            conditions: vec![condition],
        }
    }

    /// True if any condition targets the given column.
    pub fn targets(&self, attribute: &str) -> bool {
        self.conditions.iter().any(|c| c.attribute == attribute)
    }
}

/// Host-owned column descriptor, read-only per render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Logical (query) name, used in sort and filter expressions.
    pub name: String,
    /// Human-readable header label.
    pub display_name: String,
    /// Display position; negative values keep the column out of view.
    pub order: i32,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Relative width weight, if the host supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_size_factor: Option<u16>,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, order: i32) -> Self {
        Column {
            name: name.into(),
            display_name: display_name.into(),
            order,
            is_hidden: false,
            sortable: true,
            visual_size_factor: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Opaque navigable reference to a record, forwarded verbatim to the
/// host when the user opens a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    /// Entity/table the record belongs to.
    pub entity: String,
    pub id: String,
    /// Display name, when the host cares to show one while navigating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One page of records as pushed by the host: a record map plus the
/// ordered id sequence defining row order and the visible-row count.
#[derive(Debug, Clone, Default)]
pub struct RowSet<R> {
    pub records: HashMap<String, R>,
    pub row_order: Vec<String>,
}

impl<R> RowSet<R> {
    pub fn empty() -> Self {
        RowSet {
            records: HashMap::new(),
            row_order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.row_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_order.is_empty()
    }

    /// Record at a visual row index, if the id resolves.
    pub fn record_at(&self, index: usize) -> Option<&R> {
        self.row_order.get(index).and_then(|id| self.records.get(id))
    }

    /// Row id at a visual index.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.row_order.get(index).map(String::as_str)
    }
}

impl<R> RowSet<R>
where
    R: crate::traits::GridRecord,
{
    /// Builds a row set from records already in page order.
    pub fn from_page(records: Vec<R>) -> Self {
        let row_order: Vec<String> = records.iter().map(|r| r.record_id().to_string()).collect();
        let records = records
            .into_iter()
            .map(|r| (r.record_id().to_string(), r))
            .collect();
        RowSet { records, row_order }
    }
}

/// Dataset chrome that arrives fresh on every host push, next to the
/// row set. The controller always adopts the latest copy, even on
/// cycles that keep the row snapshot.
#[derive(Debug, Clone, Default)]
pub struct DatasetMeta {
    pub columns: Vec<Column>,
    /// True while the host is resolving a query for this dataset.
    pub loading: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    /// Current sort specification as the host sees it.
    pub sorting: Vec<SortStatus>,
    /// Current filter, if any.
    pub filter: Option<FilterExpression>,
}

/// Row-highlight parameters as supplied by the host, raw and unparsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightConfig {
    /// Indicator value that marks a row for highlighting.
    pub value: Option<String>,
    /// Color string (`#rrggbb` or a named color).
    pub color: Option<String>,
}

/// Render area the host has allocated to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Allocation {
    pub width: u16,
    pub height: u16,
}
