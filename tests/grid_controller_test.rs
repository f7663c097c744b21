//! Controller behavior against a recording mock host.
//!
//! These tests drive [`GridController`] the way the event loop does:
//! commands go in, host pushes come back through `handle_update`, and
//! the assertions check the host-call traffic, the page state, and the
//! visible-row-count outputs.

mod common;

use common::{account_page, drain_outputs, settled_page, test_grid, test_grid_with};
use gridlet::adapters::HostCall;
use gridlet::events::{GridOutput, HostUpdate, UpdatedProperty};
use gridlet::grid::{GridOptions, PageTarget};
use gridlet::models::{
    ConditionExpression, FilterExpression, FilterOperator, RowSet, SortDirection,
};

#[test]
fn test_sort_command_forwards_single_column_spec_and_refreshes() {
    let mut grid = test_grid();

    grid.controller.sort_by("city", true);

    let calls = grid.host.take_calls();
    assert_eq!(calls.len(), 2, "sort should produce exactly two host calls");
    match &calls[0] {
        HostCall::SetSort(spec) => {
            assert_eq!(spec.len(), 1, "sort spec should hold a single entry");
            assert_eq!(spec[0].name, "city");
            assert_eq!(spec[0].direction, SortDirection::Descending);
        }
        other => panic!("expected SetSort first, got {other:?}"),
    }
    assert_eq!(calls[1], HostCall::Refresh);
    assert!(
        grid.controller.is_pending(),
        "sort should leave the grid waiting for fresh rows"
    );
}

#[test]
fn test_sorting_another_column_replaces_the_spec() {
    let mut grid = test_grid();

    grid.controller.sort_by("name", false);
    grid.host.take_calls();
    grid.controller.sort_by("city", false);

    match &grid.host.take_calls()[0] {
        HostCall::SetSort(spec) => {
            assert_eq!(spec.len(), 1, "second sort must replace, not append");
            assert_eq!(spec[0].name, "city");
        }
        other => panic!("expected SetSort, got {other:?}"),
    }
}

#[test]
fn test_filter_empty_writes_one_condition_and_clears_wholesale() {
    let mut grid = test_grid();

    grid.controller.filter_empty("city", true);
    let calls = grid.host.take_calls();
    assert_eq!(
        calls[0],
        HostCall::SetFilter(FilterExpression::single(
            ConditionExpression::does_not_contain_data("city")
        ))
    );
    assert_eq!(calls[1], HostCall::Refresh);

    grid.controller.filter_empty("city", false);
    let calls = grid.host.take_calls();
    assert_eq!(calls[0], HostCall::ClearFilter);
    assert_eq!(calls[1], HostCall::Refresh);
}

#[test]
fn test_search_lowercases_and_blank_query_clears() {
    let mut grid = test_grid();

    grid.controller.search("name", "  Contoso ");
    match &grid.host.take_calls()[0] {
        HostCall::SetFilter(filter) => {
            assert_eq!(filter.conditions.len(), 1);
            assert_eq!(filter.conditions[0].operator, FilterOperator::Like);
            assert_eq!(filter.conditions[0].value.as_deref(), Some("contoso"));
        }
        other => panic!("expected SetFilter, got {other:?}"),
    }

    grid.controller.search("name", "   ");
    assert_eq!(
        grid.host.take_calls()[0],
        HostCall::ClearFilter,
        "blank query should clear the filter instead of matching nothing"
    );
}

#[test]
fn test_page_navigation_reaches_host_with_exact_page_numbers() {
    let mut grid = test_grid();

    grid.controller.load_page(PageTarget::Next);
    grid.controller.load_page(PageTarget::Next);
    grid.controller.load_page(PageTarget::First);

    assert_eq!(
        grid.host.take_calls(),
        vec![
            HostCall::LoadExactPage(2),
            HostCall::LoadExactPage(3),
            HostCall::LoadExactPage(1),
        ]
    );
    assert_eq!(grid.controller.current_page(), 1);
}

#[test]
fn test_reset_dataset_returns_to_first_page() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(5));
    grid.controller.load_page(PageTarget::Next);
    grid.controller.load_page(PageTarget::Next);
    assert_eq!(grid.controller.current_page(), 3);

    // Settled push without a previous page: the dataset was rebuilt
    // from scratch (sort or filter changed), not paged.
    grid.controller.handle_update(settled_page(5));

    assert_eq!(
        grid.controller.current_page(),
        1,
        "a reset dataset should land the grid back on page 1"
    );
}

#[test]
fn test_loading_push_does_not_reset_the_page() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(5));
    grid.controller.load_page(PageTarget::Next);

    let mut update = settled_page(5);
    update.meta.loading = true;
    grid.controller.handle_update(update);

    assert_eq!(
        grid.controller.current_page(),
        2,
        "an in-flight push must not be mistaken for a reset"
    );
}

#[test]
fn test_push_with_previous_page_does_not_reset() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(5));
    grid.controller.load_page(PageTarget::Next);

    let mut update = settled_page(5);
    update.meta.has_previous_page = true;
    grid.controller.handle_update(update);

    assert_eq!(
        grid.controller.current_page(),
        2,
        "a page that has predecessors is a paging result, not a reset"
    );
}

#[test]
fn test_visible_row_count_reported_only_on_change() {
    let mut grid = test_grid();

    grid.controller.handle_update(settled_page(12));
    grid.controller.handle_update(settled_page(8));
    grid.controller.handle_update(settled_page(8));

    assert_eq!(
        drain_outputs(&mut grid.outputs),
        vec![
            GridOutput::VisibleRowCount(12),
            GridOutput::VisibleRowCount(8),
        ],
        "equal consecutive counts must not repeat the notification"
    );
}

#[test]
fn test_pending_flag_cleared_by_fresh_rows() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(4));

    grid.controller.sort_by("name", false);
    assert!(grid.controller.is_busy(), "pending command should show busy");

    grid.controller.handle_update(settled_page(4));
    assert!(
        !grid.controller.is_busy(),
        "fresh rows should settle the pending command"
    );
}

#[test]
fn test_layout_push_leaves_the_command_pending() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(4));

    grid.controller.sort_by("name", false);
    assert!(grid.controller.is_pending());

    let mut update = settled_page(4);
    update.updated = vec![UpdatedProperty::Layout];
    grid.controller.handle_update(update);

    assert!(
        grid.controller.is_pending(),
        "a layout-only push carries no fresh rows and must not settle the command"
    );
    assert!(grid.controller.is_busy(), "the overlay stays up until data lands");
}

#[test]
fn test_loading_meta_keeps_grid_busy_without_pending_command() {
    let mut grid = test_grid();

    let mut update = settled_page(4);
    update.meta.loading = true;
    grid.controller.handle_update(update);

    assert!(grid.controller.is_busy());
    assert!(!grid.controller.is_pending());
}

#[test]
fn test_full_screen_follows_host_signals_not_the_command() {
    let mut grid = test_grid();

    grid.controller.open_full_screen();
    assert_eq!(grid.host.take_calls(), vec![HostCall::SetFullScreen(true)]);
    assert!(
        !grid.controller.is_full_screen(),
        "the flag only flips when the host's open signal comes back"
    );

    let mut update = settled_page(4);
    update.updated.push(UpdatedProperty::FullScreenOpen);
    grid.controller.handle_update(update);
    assert!(grid.controller.is_full_screen());

    let mut update = settled_page(4);
    update.updated.push(UpdatedProperty::FullScreenClose);
    grid.controller.handle_update(update);
    assert!(!grid.controller.is_full_screen());
}

#[test]
fn test_push_carrying_close_and_open_lands_open() {
    let mut grid = test_grid();

    let mut update = settled_page(4);
    update.updated.push(UpdatedProperty::FullScreenClose);
    update.updated.push(UpdatedProperty::FullScreenOpen);
    grid.controller.handle_update(update);

    assert!(
        grid.controller.is_full_screen(),
        "when one push carries both signals the open state wins"
    );
}

#[test]
fn test_layout_push_keeps_the_row_snapshot() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(6));
    drain_outputs(&mut grid.outputs);

    let mut update = settled_page(6);
    update.updated = vec![UpdatedProperty::Layout];
    update.rows = RowSet::empty();
    update.allocated.width = 120;
    grid.controller.handle_update(update);

    assert_eq!(
        grid.controller.visible_rows(),
        6,
        "a layout-only push must not drop the retained rows"
    );
    assert_eq!(grid.controller.allocated().width, 120);
    assert!(
        drain_outputs(&mut grid.outputs).is_empty(),
        "unchanged row count should not notify"
    );
}

#[test]
fn test_refresh_on_every_update_adopts_rows_unconditionally() {
    let mut grid = test_grid_with(GridOptions {
        refresh_on_every_update: true,
    });
    grid.controller.handle_update(settled_page(6));

    let mut update = settled_page(0);
    update.updated = vec![UpdatedProperty::Layout];
    grid.controller.handle_update(update);

    assert_eq!(
        grid.controller.visible_rows(),
        0,
        "diagnostic mode takes the pushed rows even without a dataset flag"
    );
}

#[test]
fn test_toggle_select_replaces_and_deselects() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(3));
    grid.host.take_calls();

    grid.controller.toggle_select(0);
    assert_eq!(grid.controller.selected_id(), Some("row-0"));

    grid.controller.toggle_select(2);
    assert_eq!(
        grid.controller.selected_id(),
        Some("row-2"),
        "selecting another row replaces the previous selection"
    );

    grid.controller.toggle_select(2);
    assert_eq!(
        grid.controller.selected_id(),
        None,
        "toggling the selected row deselects it"
    );

    assert_eq!(
        grid.host.take_calls(),
        vec![
            HostCall::SetSelected(vec!["row-0".to_string()]),
            HostCall::SetSelected(vec!["row-2".to_string()]),
            HostCall::SetSelected(Vec::new()),
        ]
    );
}

#[test]
fn test_selection_out_of_range_is_ignored() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(2));
    grid.host.take_calls();

    grid.controller.toggle_select(7);

    assert_eq!(grid.controller.selected_id(), None);
    assert!(grid.host.take_calls().is_empty());
}

#[test]
fn test_open_row_forwards_the_record_reference() {
    let mut grid = test_grid();
    grid.controller.handle_update(settled_page(2));
    grid.host.take_calls();

    let reference = grid
        .controller
        .open_row(1)
        .expect("row 1 should be openable");
    assert_eq!(reference.entity, "account");
    assert_eq!(reference.id, "row-1");
    assert_eq!(reference.name.as_deref(), Some("Account 1"));
    assert_eq!(grid.host.take_calls(), vec![HostCall::OpenItem(reference)]);

    assert_eq!(
        grid.controller.open_row(99),
        None,
        "an index past the page opens nothing"
    );
    assert!(grid.host.take_calls().is_empty());
}

#[test]
fn test_resize_forwards_allocation() {
    let grid = test_grid();
    grid.controller.resize(100, 40);
    assert_eq!(
        grid.host.take_calls(),
        vec![HostCall::SetAllocatedSize(100, 40)]
    );
}

#[test]
fn test_first_push_while_loading_reports_zero_rows() {
    let mut grid = test_grid();

    let mut update = HostUpdate::dataset(account_page(0), Default::default());
    update.meta.loading = true;
    grid.controller.handle_update(update);

    assert_eq!(
        drain_outputs(&mut grid.outputs),
        vec![GridOutput::VisibleRowCount(0)],
        "the initial loading push still reports its (empty) count"
    );
}
