//! Demo application shell.
//!
//! Owns the grid controller plus the purely local UI state: focus,
//! cursors, the open column menu, the search strip, and a status line.
//! Follows the prepare/render split: [`App::prepare`] rebuilds the
//! view model and clamps cursors, then rendering reads `self.view`
//! without mutating anything.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::{GridOutput, HostUpdate};
use crate::grid::{ColumnMenu, GridController, GridViewModel, MenuAction, PageTarget, SearchBar};
use crate::traits::{DatasetHost, Resources};

/// Which part of the UI receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Search,
    Menu,
}

pub struct App<H: DatasetHost> {
    pub controller: GridController<H>,
    pub resources: Arc<dyn Resources>,
    /// View model rebuilt by [`App::prepare`] each cycle.
    pub view: GridViewModel,
    pub focus: Focus,
    /// Row cursor; `None` until the user first navigates rows.
    pub cursor: Option<usize>,
    pub active_column: usize,
    pub menu: Option<ColumnMenu>,
    pub search: SearchBar,
    pub status: Option<String>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl<H: DatasetHost> App<H> {
    pub fn new(controller: GridController<H>, resources: Arc<dyn Resources>) -> Self {
        App {
            controller,
            resources,
            view: GridViewModel::empty(),
            focus: Focus::Grid,
            cursor: None,
            active_column: 0,
            menu: None,
            search: SearchBar::new(),
            status: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Feeds one host push into the controller.
    pub fn apply_update(&mut self, update: HostUpdate<H::Record>) {
        self.controller.handle_update(update);
        self.mark_dirty();
    }

    /// Surfaces grid outputs on the status line, standing in for the
    /// host-side consumer.
    pub fn apply_output(&mut self, output: GridOutput) {
        match output {
            GridOutput::VisibleRowCount(count) => {
                self.status = Some(format!("{count} rows visible"));
            }
        }
        self.mark_dirty();
    }

    /// Prepare phase: rebuilds the view model and pulls local cursors
    /// back into range. Runs before every render.
    pub fn prepare(&mut self) {
        self.view = self.controller.view_model(self.resources.as_ref());

        let rows = self.view.rows.len();
        self.cursor = match self.cursor {
            Some(_) if rows == 0 => None,
            Some(i) => Some(i.min(rows - 1)),
            None => None,
        };

        let columns = self.view.columns.len();
        if columns == 0 {
            self.active_column = 0;
        } else if self.active_column >= columns {
            self.active_column = columns - 1;
        }
        self.search.clamp_column(columns);
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.controller.resize(width, height);
        self.mark_dirty();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.focus {
            Focus::Grid => self.handle_grid_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Menu => self.handle_menu_key(key),
        }
        self.mark_dirty();
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.controller.is_full_screen() {
                    self.controller.close_full_screen();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Left | KeyCode::Char('h') => {
                self.active_column = self.active_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let columns = self.view.columns.len();
                if columns > 0 {
                    self.active_column = (self.active_column + 1).min(columns - 1);
                }
            }
            KeyCode::Char('m') => self.open_menu(),
            KeyCode::Char(' ') => {
                if let Some(cursor) = self.cursor {
                    self.controller.toggle_select(cursor);
                }
            }
            KeyCode::Enter => {
                if let Some(cursor) = self.cursor {
                    match self.controller.open_row(cursor) {
                        Some(reference) => {
                            let shown = reference.name.unwrap_or(reference.id);
                            self.status = Some(format!("Opening {shown}"));
                        }
                        None => self.status = Some("Nothing to open here".to_string()),
                    }
                }
            }
            KeyCode::PageDown | KeyCode::Char('n') => {
                if self.view.pager.next_enabled {
                    self.controller.load_page(PageTarget::Next);
                }
            }
            KeyCode::PageUp | KeyCode::Char('p') => {
                if self.view.pager.previous_enabled {
                    self.controller.load_page(PageTarget::Previous);
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if self.view.pager.first_enabled {
                    self.controller.load_page(PageTarget::First);
                }
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('f') => {
                if !self.controller.is_full_screen() {
                    self.controller.open_full_screen();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Grid,
            KeyCode::Enter => {
                if let Some(column) = self.search.selected_column(&self.view.columns) {
                    let name = column.name.clone();
                    self.controller.search(&name, self.search.query());
                    self.status = if self.search.is_empty() {
                        Some("Search cleared".to_string())
                    } else {
                        Some(format!("Searching {name}"))
                    };
                }
                self.focus = Focus::Grid;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search.next_column(self.view.columns.len());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.search.prev_column(self.view.columns.len());
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Char(c) => self.search.push_char(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let Some(menu) = self.menu.as_mut() else {
            self.focus = Focus::Grid;
            return;
        };
        match key.code {
            KeyCode::Esc => self.close_menu(),
            KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
            KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
            KeyCode::Enter => {
                let column = menu.column.name.clone();
                let filtered = menu.column.filtered;
                match menu.activate() {
                    Some(MenuAction::SortAscending) => {
                        self.controller.sort_by(&column, false);
                        self.close_menu();
                    }
                    Some(MenuAction::SortDescending) => {
                        self.controller.sort_by(&column, true);
                        self.close_menu();
                    }
                    Some(MenuAction::ToggleEmptyFilter) => {
                        self.controller.filter_empty(&column, !filtered);
                        self.close_menu();
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn open_menu(&mut self) {
        if let Some(column) = self.view.columns.get(self.active_column) {
            self.menu = Some(ColumnMenu::for_column(column.clone()));
            self.focus = Focus::Menu;
        }
    }

    fn close_menu(&mut self) {
        self.menu = None;
        self.focus = Focus::Grid;
    }

    fn move_cursor(&mut self, delta: i64) {
        let rows = self.view.rows.len();
        if rows == 0 {
            self.cursor = None;
            return;
        }
        let current = self.cursor.map(|c| c as i64).unwrap_or(-1);
        let next = (current + delta).clamp(0, rows as i64 - 1);
        self.cursor = Some(next as usize);
    }
}
