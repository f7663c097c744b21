//! Search strip rendering.
//!
//! One line above the grid: the query buffer and the target column.
//! While focused the query shows a cursor glyph and the strip uses
//! the accent style.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::grid::{ColumnHeader, SearchBar};

use super::symbols::glyphs;
use super::theme::{style_of, StyleClass};

pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    search: &SearchBar,
    columns: &[ColumnHeader],
    focused: bool,
) {
    let column_name = search
        .selected_column(columns)
        .map(|c| c.display_name.as_str())
        .unwrap_or("-");

    let query_style = if focused {
        style_of(StyleClass::SearchQuery)
    } else {
        style_of(StyleClass::SearchLabel)
    };

    let mut spans = vec![
        Span::styled(" / ", style_of(StyleClass::SearchLabel)),
        Span::styled(search.query().to_string(), query_style),
    ];
    if focused {
        spans.push(Span::styled(glyphs().input_cursor, query_style));
    }
    spans.push(Span::styled(
        format!("  in {column_name} {}", glyphs().dropdown),
        style_of(StyleClass::SearchLabel),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
