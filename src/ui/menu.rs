//! Column menu popup.
//!
//! A small centered overlay listing the three column actions. Checked
//! entries carry the check glyph, disabled entries render dim; the
//! cursor row gets the active style.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::grid::ColumnMenu;
use crate::traits::Resources;

use super::grid::centered_rect;
use super::symbols::glyphs;
use super::theme::{style_of, StyleClass, COLOR_BORDER};

const MENU_WIDTH: u16 = 32;

pub fn render_column_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &ColumnMenu,
    resources: &dyn Resources,
) {
    let items = menu.items(resources);
    let popup = centered_rect(area, MENU_WIDTH, items.len() as u16 + 2);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let class = if !item.enabled {
                StyleClass::MenuItemDisabled
            } else if i == menu.cursor() {
                StyleClass::MenuItemActive
            } else {
                StyleClass::MenuItem
            };
            let check = if item.checked {
                glyphs().menu_check
            } else {
                " "
            };
            Line::from(Span::styled(
                format!(" {check} {}", item.label),
                style_of(class),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", menu.column.display_name));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
