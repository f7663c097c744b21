//! Rendering for the grid demo.
//!
//! Pure render phase: every function here draws from prepared state
//! and mutates nothing. [`render`] lays out the search strip, the
//! grid, and the status line, then stacks the column menu overlay on
//! top when one is open. Full screen drops the search strip and gives
//! the grid the whole frame.

pub mod grid;
pub mod menu;
pub mod search_bar;
pub mod symbols;
pub mod theme;

pub use grid::{centered_rect, column_widths, render_grid, truncate_cell};
pub use menu::render_column_menu;
pub use search_bar::render_search_bar;
pub use symbols::{glyphs, register_glyphs, GlyphSet};
pub use theme::{style_of, StyleClass};

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::traits::DatasetHost;

const KEY_HINTS: [&str; 6] = [
    "q quit",
    "/ search",
    "m column menu",
    "space select",
    "enter open",
    "f full screen",
];

fn key_hints() -> String {
    KEY_HINTS.join(&format!(" {} ", glyphs().hint_separator))
}

/// Renders one frame from prepared app state.
pub fn render<H: DatasetHost>(frame: &mut Frame, app: &App<H>) {
    let area = frame.area();

    if app.controller.is_full_screen() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(area);
        render_grid(frame, chunks[0], &app.view, app.cursor, app.active_column);
        render_status(frame, chunks[1], app);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);
        render_search_bar(
            frame,
            chunks[0],
            &app.search,
            &app.view.columns,
            app.focus == Focus::Search,
        );
        render_grid(frame, chunks[1], &app.view, app.cursor, app.active_column);
        render_status(frame, chunks[2], app);
    }

    if app.focus == Focus::Menu {
        if let Some(menu) = &app.menu {
            render_column_menu(frame, area, menu, app.resources.as_ref());
        }
    }
}

fn render_status<H: DatasetHost>(frame: &mut Frame, area: ratatui::layout::Rect, app: &App<H>) {
    let text = match app.status.as_deref() {
        Some(status) => status.to_string(),
        None => key_hints(),
    };
    let line = Line::from(Span::styled(
        format!(" {text}"),
        style_of(StyleClass::StatusLine),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use crate::adapters::{EmbeddedResources, JsonRecord, MockHost};
    use crate::events::HostUpdate;
    use crate::grid::{GridController, GridOptions};
    use crate::models::{Column, DatasetMeta, RowSet};

    fn test_app() -> App<MockHost> {
        let (output_tx, _output_rx) = mpsc::unbounded_channel();
        let controller = GridController::new(
            Arc::new(MockHost::new()),
            output_tx,
            GridOptions::default(),
        );
        App::new(controller, Arc::new(EmbeddedResources::new()))
    }

    fn sample_update() -> HostUpdate<JsonRecord> {
        let rows = RowSet::from_page(vec![
            JsonRecord::new("1", "t", serde_json::json!({"name": "Contoso", "city": "Oslo"})),
            JsonRecord::new("2", "t", serde_json::json!({"name": "Fabrikam", "city": null})),
        ]);
        let meta = DatasetMeta {
            columns: vec![
                Column::new("name", "Name", 0),
                Column::new("city", "City", 1),
            ],
            ..DatasetMeta::default()
        };
        HostUpdate::dataset(rows, meta)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_smoke_with_rows() {
        let mut app = test_app();
        app.apply_update(sample_update());
        app.prepare();

        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render(frame, &app)).expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Name"), "header should be drawn");
        assert!(text.contains("Contoso"), "rows should be drawn");
        assert!(text.contains("Page 1"), "footer should be drawn");
    }

    #[test]
    fn test_status_hints_join_with_the_glyph_separator() {
        let mut app = test_app();
        app.apply_update(sample_update());
        app.prepare();

        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render(frame, &app)).expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("q quit"), "key hints should be drawn");
        assert!(
            text.contains(glyphs().hint_separator),
            "hints should join with the registered separator"
        );
    }

    #[test]
    fn test_render_before_first_push_shows_overlay() {
        let mut app = test_app();
        app.prepare();

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render(frame, &app)).expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Loading"), "empty model renders busy");
    }
}
