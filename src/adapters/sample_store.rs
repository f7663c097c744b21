//! In-memory record store used by the demo binary.
//!
//! Holds a full record list and answers page queries the way a remote
//! backend would: filter, then sort, then slice, with optional
//! simulated latency so the loading overlay is actually visible.
//! Records either come from a JSON dataset file or from the built-in
//! sample generator.

use std::cmp::Ordering;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::adapters::json_record::JsonRecord;
use crate::models::{Column, FilterExpression, FilterOperator, SortStatus};
use crate::traits::{GridRecord, PageQuery, PageSlice, RecordStore, StoreError};

/// Store over a fixed record list.
#[derive(Debug)]
pub struct SampleStore {
    entity: String,
    columns: Vec<Column>,
    records: Vec<JsonRecord>,
    latency: Duration,
}

/// On-disk dataset shape for `--data <file>`: entity name, column
/// descriptors, and one JSON object per record. An `id` key is used
/// as the record id when present, otherwise one is generated.
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    pub entity: String,
    pub columns: Vec<Column>,
    pub records: Vec<Map<String, Value>>,
}

impl SampleStore {
    pub fn new(entity: impl Into<String>, columns: Vec<Column>, records: Vec<JsonRecord>) -> Self {
        SampleStore {
            entity: entity.into(),
            columns,
            records,
            latency: Duration::ZERO,
        }
    }

    /// Simulated query latency applied to every fetch.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Loads a dataset file.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path)?;
        let file: DatasetFile = serde_json::from_str(&text)?;
        let records = file
            .records
            .into_iter()
            .map(|mut fields| {
                let id = match fields.remove("id") {
                    Some(Value::String(s)) => s,
                    Some(other) => other.to_string(),
                    None => Uuid::new_v4().to_string(),
                };
                JsonRecord::new(id, file.entity.clone(), Value::Object(fields))
            })
            .collect();
        Ok(SampleStore::new(file.entity, file.columns, records))
    }

    /// Generates `count` sample account records.
    pub fn with_sample_data(count: usize) -> Self {
        let names = [
            "Contoso", "Fabrikam", "Adventure Works", "Proseware", "Litware", "Northwind",
            "Tailspin", "Wingtip", "Woodgrove", "Fourth Coffee",
        ];
        let industries = ["Retail", "Manufacturing", "Logistics", "Finance", "Media"];
        let base = Utc.with_ymd_and_hms(2023, 1, 9, 8, 0, 0).unwrap();
        let records = (0..count)
            .map(|i| {
                let name = format!("{} {:03}", names[i % names.len()], i + 1);
                // Every sixth record goes without an industry so the
                // missing-data filter has something to bite on.
                let industry = if i % 6 == 5 {
                    Value::Null
                } else {
                    Value::String(industries[i % industries.len()].to_string())
                };
                let fields = serde_json::json!({
                    "name": name,
                    "industry": industry,
                    "revenue": ((i * 7919) % 900 + 100) * 1000,
                    "employees": (i * 37) % 4800 + 12,
                    "created_on": (base + ChronoDuration::days(i as i64 % 700)).to_rfc3339(),
                    "HighlightIndicator": if i % 7 == 0 { Value::String("1".into()) } else { Value::Null },
                });
                JsonRecord::new(Uuid::new_v4().to_string(), "accounts", fields)
            })
            .collect();
        SampleStore::new("accounts", sample_columns(), records)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// Column set for the generated sample accounts.
pub fn sample_columns() -> Vec<Column> {
    let mut columns = vec![
        Column::new("name", "Account Name", 0),
        Column::new("industry", "Industry", 1),
        Column::new("revenue", "Annual Revenue", 2),
        Column::new("employees", "Employees", 3),
        Column::new("created_on", "Created On", 4),
        Column::new("HighlightIndicator", "Highlight", 5).hidden(),
    ];
    columns[0].visual_size_factor = Some(3);
    columns[1].visual_size_factor = Some(2);
    columns
}

#[async_trait]
impl RecordStore for SampleStore {
    type Record = JsonRecord;

    async fn fetch_page(&self, query: &PageQuery) -> Result<PageSlice<JsonRecord>, StoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        for sort in &query.sorting {
            if !self.has_column(&sort.name) {
                return Err(StoreError::UnknownColumn(sort.name.clone()));
            }
        }

        let mut matched: Vec<&JsonRecord> = self
            .records
            .iter()
            .filter(|r| matches_filter(r, query.filter.as_ref()))
            .collect();
        apply_sort(&mut matched, &query.sorting);

        let page_size = query.page_size.max(1) as usize;
        let page_count = matched.len().div_ceil(page_size).max(1);
        let page = (query.page.max(1) as usize).min(page_count);
        let start = (page - 1) * page_size;
        let records = matched
            .iter()
            .skip(start)
            .take(page_size)
            .map(|r| (*r).clone())
            .collect();

        Ok(PageSlice {
            records,
            page: page as u32,
            has_previous: page > 1,
            has_next: page < page_count,
            total: Some(matched.len()),
        })
    }
}

fn matches_filter(record: &JsonRecord, filter: Option<&FilterExpression>) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    filter.conditions.iter().all(|condition| {
        let raw = record.raw_value(&condition.attribute);
        match condition.operator {
            FilterOperator::DoesNotContainData => {
                matches!(&raw, None) || matches!(&raw, Some(Value::String(s)) if s.is_empty())
            }
            FilterOperator::Like => {
                let Some(pattern) = condition.value.as_deref() else {
                    return true;
                };
                record
                    .formatted_value(&condition.attribute)
                    .is_some_and(|v| v.to_lowercase().contains(&pattern.to_lowercase()))
            }
            FilterOperator::Equal => {
                let Some(expected) = condition.value.as_deref() else {
                    return false;
                };
                record
                    .formatted_value(&condition.attribute)
                    .is_some_and(|v| v == expected)
            }
        }
    })
}

/// Applies the sort spec via successive stable sorts, last entry
/// first, so earlier entries take precedence.
fn apply_sort(records: &mut [&JsonRecord], sorting: &[SortStatus]) {
    for sort in sorting.iter().rev() {
        records.sort_by(|a, b| {
            let ordering = compare_values(a.raw_value(&sort.name), b.raw_value(&sort.name));
            if sort.direction.is_descending() {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
}

/// Value ordering: missing before present, numbers numerically,
/// strings case-insensitively, mixed types by type rank.
fn compare_values(a: Option<Value>, b: Option<Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (&a, &b) {
            (Value::Number(x), Value::Number(y)) => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
            (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            _ => type_rank(&a).cmp(&type_rank(&b)),
        },
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
