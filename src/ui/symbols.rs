//! Glyphs used by the grid chrome.
//!
//! The glyph set is registered once per process, before the first
//! render; later registrations are ignored so every grid instance in
//! the process draws with the same set. Terminals without decent
//! Unicode coverage can register the ASCII set instead.

use once_cell::sync::OnceCell;

/// The glyphs the chrome draws annotations and markers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub sort_ascending: &'static str,
    pub sort_descending: &'static str,
    pub filtered: &'static str,
    pub selected: &'static str,
    pub menu_check: &'static str,
    pub dropdown: &'static str,
    pub ellipsis: &'static str,
    pub page_first: &'static str,
    pub page_previous: &'static str,
    pub page_next: &'static str,
    pub input_cursor: &'static str,
    pub hint_separator: &'static str,
}

const UNICODE: GlyphSet = GlyphSet {
    sort_ascending: "↑",
    sort_descending: "↓",
    filtered: "▽",
    selected: "●",
    menu_check: "✓",
    dropdown: "▾",
    ellipsis: "…",
    page_first: "⇤",
    page_previous: "←",
    page_next: "→",
    input_cursor: "█",
    hint_separator: "·",
};

const ASCII: GlyphSet = GlyphSet {
    sort_ascending: "^",
    sort_descending: "v",
    filtered: "#",
    selected: "*",
    menu_check: "x",
    dropdown: "v",
    ellipsis: "...",
    page_first: "|<",
    page_previous: "<",
    page_next: ">",
    input_cursor: "_",
    hint_separator: "|",
};

static GLYPHS: OnceCell<GlyphSet> = OnceCell::new();

/// Registers the process-wide glyph set. Returns `false` when a set
/// was already registered, in which case the call changes nothing.
pub fn register_glyphs(ascii: bool) -> bool {
    let set = if ascii { ASCII } else { UNICODE };
    GLYPHS.set(set).is_ok()
}

/// The registered glyph set; defaults to Unicode when nothing was
/// registered before the first render.
pub fn glyphs() -> &'static GlyphSet {
    GLYPHS.get_or_init(|| UNICODE)
}
