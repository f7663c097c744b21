//! The grid control core.
//!
//! [`GridController`] is the per-instance state machine; everything
//! else in this module is pure derivation over its state. The split
//! mirrors the render pipeline: the controller absorbs host pushes and
//! user commands, [`view`] turns the resulting state into a
//! [`GridViewModel`], and the `ui` module draws that model without
//! touching controller state.

pub mod column_menu;
pub mod controller;
pub mod highlight;
pub mod search;
pub mod view;

pub use column_menu::{ColumnMenu, MenuAction, MenuItem};
pub use controller::{GridController, GridOptions, PageTarget};
pub use search::SearchBar;
pub use view::{ColumnHeader, GridViewModel, PagerModel, RowView};
