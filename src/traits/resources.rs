//! Localized string lookup.
//!
//! The grid consumes translated strings through this trait and never
//! owns localization data itself. Implementations return the key
//! itself when no translation exists, so a missing table degrades to
//! readable (if ugly) labels instead of blank chrome.

/// String lookup by resource key.
pub trait Resources: Send + Sync {
    fn string(&self, key: &str) -> String;

    /// Looks up a template and substitutes `{0}`, `{1}`, ... with the
    /// given arguments.
    fn string_format(&self, key: &str, args: &[&str]) -> String {
        format_template(&self.string(key), args)
    }
}

/// Resource keys the grid chrome uses.
pub mod keys {
    /// Column menu: sort ascending.
    pub const SORT_ASCENDING: &str = "Label_SortAZ";
    /// Column menu: sort descending.
    pub const SORT_DESCENDING: &str = "Label_SortZA";
    /// Column menu: toggle the missing-data filter.
    pub const FILTER_EMPTY: &str = "Label_DoesNotContainData";
    /// Footer link that requests the full-screen presentation.
    pub const SHOW_FULL_SCREEN: &str = "Label_ShowFullScreen";
    /// Footer template; `{0}` = page number, `{1}` = selected count.
    pub const GRID_FOOTER: &str = "Label_Grid_Footer";
}

/// Substitutes positional `{n}` placeholders, replacing the first
/// occurrence of each.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        let placeholder = format!("{{{index}}}");
        out = out.replacen(&placeholder, arg, 1);
    }
    out
}
