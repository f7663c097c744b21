//! Built-in English string table.
//!
//! Hosts that want localization implement [`Resources`] themselves;
//! everything else gets these defaults. Unknown keys come back as the
//! key itself so missing entries stay visible instead of blanking the
//! chrome.

use crate::traits::resources::keys;
use crate::traits::Resources;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn new() -> Self {
        EmbeddedResources
    }
}

const STRINGS: &[(&str, &str)] = &[
    (keys::SORT_ASCENDING, "A to Z"),
    (keys::SORT_DESCENDING, "Z to A"),
    (keys::FILTER_EMPTY, "Does not contain data"),
    (keys::SHOW_FULL_SCREEN, "Show full screen"),
    (keys::GRID_FOOTER, "Page {0} ({1} selected)"),
];

impl Resources for EmbeddedResources {
    fn string(&self, key: &str) -> String {
        STRINGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
