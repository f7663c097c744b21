//! Grid rendering: header, body rows, footer, loading overlay.
//!
//! Draws a [`GridViewModel`] and nothing else; all state reads happen
//! in the prepare phase before this module runs. Column widths come
//! from the headers' relative weights, and cell text is truncated to
//! its column with an ellipsis rather than clipped mid-glyph.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::grid::{ColumnHeader, GridViewModel};

use super::symbols::glyphs;
use super::theme::{style_of, StyleClass, COLOR_BORDER};

/// Columns never shrink below this many cells.
const MIN_COLUMN_WIDTH: u16 = 6;

/// Width of the selection marker column.
const MARKER_WIDTH: u16 = 2;

/// Renders the whole grid into `area`.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    model: &GridViewModel,
    cursor: Option<usize>,
    active_column: usize,
) {
    if area.height < 3 || area.width < MIN_COLUMN_WIDTH {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let table_area = chunks[0];
    let footer_area = chunks[1];

    render_table(frame, table_area, model, cursor, active_column);
    render_footer(frame, footer_area, model);

    if model.busy {
        render_busy_overlay(frame, table_area);
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    model: &GridViewModel,
    cursor: Option<usize>,
    active_column: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));

    if model.columns.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    // One cell of spacing between the marker and every column.
    let spacing = model.columns.len() as u16;
    let inner_width = area.width.saturating_sub(2 + MARKER_WIDTH + spacing);
    let widths = column_widths(inner_width, &model.columns);

    let header_cells = std::iter::once(Cell::from(" ")).chain(
        model
            .columns
            .iter()
            .enumerate()
            .zip(widths.iter())
            .map(|((i, column), width)| header_cell(column, *width, i == active_column)),
    );
    let header = Row::new(header_cells).height(1);

    let rows = model.rows.iter().enumerate().map(|(i, row)| {
        let marker = if row.selected { glyphs().selected } else { " " };
        let cells = std::iter::once(Cell::from(marker)).chain(
            row.cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| {
                    let class = if row.id.is_some() {
                        StyleClass::Cell
                    } else {
                        StyleClass::CellDim
                    };
                    Cell::from(truncate_cell(cell, *width)).style(style_of(class))
                }),
        );

        let mut style = Style::default();
        if let Some(color) = row.highlight {
            style = style.bg(color);
        }
        if row.selected {
            style = style.patch(style_of(StyleClass::RowSelected));
        }
        if cursor == Some(i) {
            style = style.patch(style_of(StyleClass::RowCursor));
        }
        Row::new(cells).style(style).height(1)
    });

    let constraints: Vec<Constraint> = std::iter::once(Constraint::Length(MARKER_WIDTH))
        .chain(widths.iter().map(|w| Constraint::Length(*w)))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}

/// Header cell with sort direction and filter annotations.
fn header_cell(column: &ColumnHeader, width: u16, active: bool) -> Cell<'static> {
    let glyph_set = glyphs();
    let mut annotation = String::new();
    if let Some(direction) = column.sorted {
        annotation.push(' ');
        annotation.push_str(if direction.is_descending() {
            glyph_set.sort_descending
        } else {
            glyph_set.sort_ascending
        });
    }
    if column.filtered {
        annotation.push(' ');
        annotation.push_str(glyph_set.filtered);
    }

    let label_width = (width as usize).saturating_sub(UnicodeWidthStr::width(annotation.as_str()));
    let label = truncate_cell(&column.display_name, label_width as u16);
    let class = if active {
        StyleClass::HeaderCellActive
    } else {
        StyleClass::HeaderCell
    };
    Cell::from(Line::from(vec![
        Span::styled(label, style_of(class)),
        Span::styled(annotation, style_of(StyleClass::Annotation)),
    ]))
}

fn render_footer(frame: &mut Frame, area: Rect, model: &GridViewModel) {
    let glyph_set = glyphs();
    let pager = &model.pager;

    let action = |enabled: bool| {
        style_of(if enabled {
            StyleClass::FooterAction
        } else {
            StyleClass::FooterActionDisabled
        })
    };
    let mut spans = vec![
        Span::styled(format!(" {}", pager.footer_text), style_of(StyleClass::FooterText)),
        Span::raw("  "),
        Span::styled(glyph_set.page_first, action(pager.first_enabled)),
        Span::raw(" "),
        Span::styled(glyph_set.page_previous, action(pager.previous_enabled)),
        Span::raw(" "),
        Span::styled(glyph_set.page_next, action(pager.next_enabled)),
    ];
    if let Some(label) = &pager.full_screen_label {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{label}]"),
            style_of(StyleClass::FooterAction),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_busy_overlay(frame: &mut Frame, area: Rect) {
    let overlay = centered_rect(area, 24, 3);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let text = Paragraph::new(Line::from(Span::styled(
        "Loading",
        style_of(StyleClass::Overlay),
    )))
    .centered()
    .block(block);
    frame.render_widget(text, overlay);
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Distributes `total` cells across columns proportionally to their
/// weights, never below [`MIN_COLUMN_WIDTH`]. When rounding the shares
/// up to the minimum overflows the total, the overflow is trimmed from
/// the rightmost columns that still sit above the minimum.
pub fn column_widths(total: u16, columns: &[ColumnHeader]) -> Vec<u16> {
    if columns.is_empty() || total == 0 {
        return Vec::new();
    }
    let weight_sum: u32 = columns.iter().map(|c| u32::from(c.weight)).sum::<u32>().max(1);
    let mut widths: Vec<u16> = columns
        .iter()
        .map(|c| {
            let share = u32::from(total) * u32::from(c.weight) / weight_sum;
            (share as u16).max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let mut excess: i32 =
        widths.iter().map(|w| i32::from(*w)).sum::<i32>() - i32::from(total);
    for width in widths.iter_mut().rev() {
        if excess <= 0 {
            break;
        }
        let cut = (i32::from(*width) - i32::from(MIN_COLUMN_WIDTH))
            .min(excess)
            .max(0);
        *width -= cut as u16;
        excess -= cut;
    }
    widths
}

/// Truncates to a display width, appending an ellipsis when text was
/// cut. Wide glyphs count their full cell width.
pub fn truncate_cell(text: &str, width: u16) -> String {
    truncate_with(text, width, glyphs().ellipsis)
}

fn truncate_with(text: &str, width: u16, ellipsis: &str) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let ellipsis_width = UnicodeWidthStr::width(ellipsis);
    if ellipsis_width >= width {
        // No room for text at all; shorten the marker itself.
        return take_width(ellipsis, width);
    }
    let mut out = take_width(text, width - ellipsis_width);
    out.push_str(ellipsis);
    out
}

/// The longest prefix that fits `budget` display cells.
fn take_width(text: &str, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}
