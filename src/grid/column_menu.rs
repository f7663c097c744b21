//! Per-column contextual menu.
//!
//! Three actions: sort ascending, sort descending, toggle the
//! missing-data filter. Checked and disabled flags derive entirely
//! from the column's current annotation; the menu keeps no state
//! beyond a cursor. Activating a disabled item is a no-op.

use crate::models::SortDirection;
use crate::traits::resources::keys;
use crate::traits::Resources;

use super::view::ColumnHeader;

/// The actions a column menu offers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SortAscending,
    SortDescending,
    ToggleEmptyFilter,
}

const ACTIONS: [MenuAction; 3] = [
    MenuAction::SortAscending,
    MenuAction::SortDescending,
    MenuAction::ToggleEmptyFilter,
];

/// One renderable menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub action: MenuAction,
    pub label: String,
    pub checked: bool,
    pub enabled: bool,
}

/// Menu opened for one column.
#[derive(Debug, Clone)]
pub struct ColumnMenu {
    pub column: ColumnHeader,
    cursor: usize,
}

impl ColumnMenu {
    pub fn for_column(column: ColumnHeader) -> Self {
        ColumnMenu { column, cursor: 0 }
    }

    /// Both sort actions go dark together on unsortable columns; the
    /// filter action is always available.
    pub fn enabled(&self, action: MenuAction) -> bool {
        match action {
            MenuAction::SortAscending | MenuAction::SortDescending => self.column.sortable,
            MenuAction::ToggleEmptyFilter => true,
        }
    }

    pub fn checked(&self, action: MenuAction) -> bool {
        match action {
            MenuAction::SortAscending => self.column.sorted == Some(SortDirection::Ascending),
            MenuAction::SortDescending => self.column.sorted == Some(SortDirection::Descending),
            MenuAction::ToggleEmptyFilter => self.column.filtered,
        }
    }

    /// Renderable entries in display order.
    pub fn items(&self, resources: &dyn Resources) -> Vec<MenuItem> {
        ACTIONS
            .iter()
            .map(|&action| MenuItem {
                action,
                label: resources.string(label_key(action)),
                checked: self.checked(action),
                enabled: self.enabled(action),
            })
            .collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % ACTIONS.len();
    }

    pub fn move_up(&mut self) {
        self.cursor = (self.cursor + ACTIONS.len() - 1) % ACTIONS.len();
    }

    /// The action under the cursor, if it is enabled.
    pub fn activate(&self) -> Option<MenuAction> {
        let action = ACTIONS[self.cursor];
        self.enabled(action).then_some(action)
    }
}

fn label_key(action: MenuAction) -> &'static str {
    match action {
        MenuAction::SortAscending => keys::SORT_ASCENDING,
        MenuAction::SortDescending => keys::SORT_DESCENDING,
        MenuAction::ToggleEmptyFilter => keys::FILTER_EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(sortable: bool) -> ColumnHeader {
        ColumnHeader {
            name: "name".to_string(),
            display_name: "Name".to_string(),
            sortable,
            sorted: None,
            filtered: false,
            weight: 1,
        }
    }

    #[test]
    fn test_unsortable_column_disables_both_sorts_only() {
        let menu = ColumnMenu::for_column(header(false));
        assert!(!menu.enabled(MenuAction::SortAscending));
        assert!(!menu.enabled(MenuAction::SortDescending));
        assert!(
            menu.enabled(MenuAction::ToggleEmptyFilter),
            "filter stays available on unsortable columns"
        );
    }

    #[test]
    fn test_checked_flags_follow_annotation() {
        let mut column = header(true);
        column.sorted = Some(SortDirection::Descending);
        column.filtered = true;
        let menu = ColumnMenu::for_column(column);
        assert!(!menu.checked(MenuAction::SortAscending));
        assert!(menu.checked(MenuAction::SortDescending));
        assert!(menu.checked(MenuAction::ToggleEmptyFilter));
    }

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut menu = ColumnMenu::for_column(header(true));
        menu.move_up();
        assert_eq!(menu.cursor(), 2);
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn test_activate_refuses_disabled_items() {
        let menu = ColumnMenu::for_column(header(false));
        assert_eq!(menu.activate(), None, "sort ascending is disabled");
        let mut menu = ColumnMenu::for_column(header(false));
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.activate(), Some(MenuAction::ToggleEmptyFilter));
    }
}
