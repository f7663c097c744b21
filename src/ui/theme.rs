//! Color theme for the grid chrome.
//!
//! Minimal dark palette plus the style-class table. Chrome code asks
//! for a [`StyleClass`] instead of assembling styles inline, so the
//! class-to-style mapping stays fixed and in one place.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text.
pub const COLOR_HEADER: Color = Color::White;

/// Regular cell text.
pub const COLOR_TEXT: Color = Color::Gray;

/// De-emphasized chrome (placeholders, disabled actions).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Accent for the active column and focused widgets.
pub const COLOR_ACCENT: Color = Color::White;

/// Background of the selected row.
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 55);

/// Background of the cursor row.
pub const COLOR_CURSOR_BG: Color = Color::Rgb(28, 28, 36);

/// Loading overlay text.
pub const COLOR_BUSY: Color = Color::Yellow;

/// Sort/filter annotations in header cells.
pub const COLOR_ANNOTATION: Color = Color::LightCyan;

// ============================================================================
// Style classes
// ============================================================================

/// Every distinct look the chrome draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    HeaderCell,
    HeaderCellActive,
    Annotation,
    Cell,
    CellDim,
    RowSelected,
    RowCursor,
    FooterText,
    FooterAction,
    FooterActionDisabled,
    Overlay,
    MenuItem,
    MenuItemActive,
    MenuItemDisabled,
    SearchLabel,
    SearchQuery,
    StatusLine,
}

/// The fixed class-to-style table.
pub fn style_of(class: StyleClass) -> Style {
    match class {
        StyleClass::HeaderCell => Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
        StyleClass::HeaderCellActive => Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        StyleClass::Annotation => Style::default().fg(COLOR_ANNOTATION),
        StyleClass::Cell => Style::default().fg(COLOR_TEXT),
        StyleClass::CellDim => Style::default().fg(COLOR_DIM),
        StyleClass::RowSelected => Style::default().bg(COLOR_SELECTED_BG),
        StyleClass::RowCursor => Style::default().bg(COLOR_CURSOR_BG),
        StyleClass::FooterText => Style::default().fg(COLOR_TEXT),
        StyleClass::FooterAction => Style::default().fg(COLOR_ACCENT),
        StyleClass::FooterActionDisabled => Style::default().fg(COLOR_DIM),
        StyleClass::Overlay => Style::default()
            .fg(COLOR_BUSY)
            .add_modifier(Modifier::BOLD),
        StyleClass::MenuItem => Style::default().fg(COLOR_TEXT),
        StyleClass::MenuItemActive => Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD),
        StyleClass::MenuItemDisabled => Style::default().fg(COLOR_DIM),
        StyleClass::SearchLabel => Style::default().fg(COLOR_DIM),
        StyleClass::SearchQuery => Style::default().fg(COLOR_ACCENT),
        StyleClass::StatusLine => Style::default().fg(COLOR_DIM),
    }
}
