//! Row highlighting.
//!
//! A pure predicate: a row is highlighted when the host configured
//! both an indicator value and a color, and the row's indicator field
//! equals that value. Comparison is against the raw field value
//! rendered as a string, so numeric and boolean indicators match their
//! textual configuration.

use ratatui::style::Color;
use serde_json::Value;

use crate::models::HighlightConfig;
use crate::traits::GridRecord;

/// Field consulted for the indicator value.
pub const INDICATOR_FIELD: &str = "HighlightIndicator";

/// Decides the background override for one row. `None` means no
/// highlighting: configuration incomplete, color unparseable, or the
/// indicator does not match.
pub fn row_highlight<R: GridRecord>(record: &R, config: &HighlightConfig) -> Option<Color> {
    let value = config.value.as_deref()?;
    let color = parse_color(config.color.as_deref()?)?;
    let raw = record.raw_value(INDICATOR_FIELD)?;
    indicator_matches(&raw, value).then_some(color)
}

fn indicator_matches(raw: &Value, value: &str) -> bool {
    match raw {
        Value::String(s) => s == value,
        Value::Number(n) => n.to_string() == value,
        Value::Bool(b) => b.to_string() == value,
        _ => false,
    }
}

/// Parses `#rrggbb` hex or a named color; ratatui's own parser covers
/// both forms.
pub fn parse_color(input: &str) -> Option<Color> {
    input.trim().parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonRecord;

    fn config(value: &str, color: &str) -> HighlightConfig {
        HighlightConfig {
            value: Some(value.to_string()),
            color: Some(color.to_string()),
        }
    }

    fn record(indicator: serde_json::Value) -> JsonRecord {
        JsonRecord::new(
            "r1",
            "accounts",
            serde_json::json!({ INDICATOR_FIELD: indicator }),
        )
    }

    #[test]
    fn test_matching_indicator_yields_color() {
        let got = row_highlight(&record("1".into()), &config("1", "#ff0000"));
        assert_eq!(got, Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_numeric_indicator_matches_textual_config() {
        let got = row_highlight(&record(serde_json::json!(1)), &config("1", "red"));
        assert_eq!(got, Some(Color::Red));
    }

    #[test]
    fn test_mismatch_and_missing_field_yield_none() {
        assert_eq!(
            row_highlight(&record("2".into()), &config("1", "red")),
            None
        );
        let bare = JsonRecord::new("r2", "accounts", serde_json::json!({}));
        assert_eq!(row_highlight(&bare, &config("1", "red")), None);
    }

    #[test]
    fn test_incomplete_config_yields_none() {
        let rec = record("1".into());
        let no_color = HighlightConfig {
            value: Some("1".to_string()),
            color: None,
        };
        assert_eq!(row_highlight(&rec, &no_color), None);
        let bad_color = config("1", "not-a-color");
        assert_eq!(row_highlight(&rec, &bad_color), None);
    }
}
