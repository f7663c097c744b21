//! End-to-end flow: sample store -> host -> controller -> render.
//!
//! These tests play the event loop by hand. A zero-latency
//! [`SampleStore`] backs a [`StoreHost`]; keys go into the [`App`],
//! pushes come back over the update channel, and assertions read the
//! rendered [`TestBackend`] buffer.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridlet::adapters::{EmbeddedResources, JsonRecord, SampleStore, StoreHost};
use gridlet::app::App;
use gridlet::events::HostUpdate;
use gridlet::grid::{GridController, GridOptions};
use gridlet::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::timeout;

const PUSH_WAIT: Duration = Duration::from_millis(500);

type SampleHost = StoreHost<SampleStore>;

struct Flow {
    app: App<SampleHost>,
    host: SampleHost,
    updates: mpsc::UnboundedReceiver<HostUpdate<JsonRecord>>,
}

fn start_flow(records: usize, page_size: u32) -> Flow {
    let store = SampleStore::with_sample_data(records);
    let columns = store.columns().to_vec();
    let (update_tx, updates) = mpsc::unbounded_channel();
    let (output_tx, _outputs) = mpsc::unbounded_channel();

    let host = StoreHost::new(store, columns, page_size, update_tx);
    let controller = GridController::new(Arc::new(host.clone()), output_tx, GridOptions::default());
    let app = App::new(controller, Arc::new(EmbeddedResources::new()));
    host.start();

    Flow { app, host, updates }
}

impl Flow {
    /// Absorbs pushes until the grid settles out of its busy state.
    async fn settle(&mut self) {
        loop {
            let update = timeout(PUSH_WAIT, self.updates.recv())
                .await
                .expect("timed out waiting for a host push")
                .expect("update channel closed");
            self.app.apply_update(update);
            if !self.app.controller.is_busy() {
                return;
            }
        }
    }

    /// One push, for host signals that do not start a query.
    async fn absorb_one(&mut self) {
        let update = timeout(PUSH_WAIT, self.updates.recv())
            .await
            .expect("timed out waiting for a host push")
            .expect("update channel closed");
        self.app.apply_update(update);
    }

    fn press(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Prepares, renders and flattens the buffer to a searchable string.
    fn draw(&mut self) -> String {
        self.app.prepare();
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| ui::render(frame, &self.app))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}

#[tokio::test]
async fn test_first_page_renders_after_start() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;

    let text = flow.draw();
    assert!(text.contains("Contoso 001"), "first page rows should render");
    assert!(text.contains("Page 1 (0 selected)"));
    assert!(!text.contains("Loading"), "settled grid shows no overlay");
}

#[tokio::test]
async fn test_paging_forward_renders_the_next_page() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;
    flow.draw();

    flow.press(KeyCode::Char('n'));
    flow.settle().await;

    let text = flow.draw();
    assert!(text.contains("Page 2"));
    assert!(
        text.contains("Adventure Works 013"),
        "page 2 should start at the thirteenth record"
    );
}

#[tokio::test]
async fn test_sort_descending_through_the_column_menu() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;
    flow.draw();

    flow.press(KeyCode::Char('m'));
    flow.press(KeyCode::Char('j'));
    flow.press(KeyCode::Enter);
    flow.settle().await;

    let text = flow.draw();
    assert!(
        text.contains("Woodgrove 029"),
        "descending name sort should surface the last names first"
    );
}

#[tokio::test]
async fn test_search_narrows_to_matching_rows() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;
    flow.draw();

    flow.press(KeyCode::Char('/'));
    flow.type_str("contoso");
    flow.press(KeyCode::Enter);
    flow.settle().await;

    let text = flow.draw();
    assert!(text.contains("Contoso 001"));
    assert!(text.contains("Contoso 011"));
    assert!(
        !text.contains("Fabrikam"),
        "non-matching rows are filtered out"
    );
}

#[tokio::test]
async fn test_full_screen_round_trip() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;

    let text = flow.draw();
    assert!(text.contains("[Show full screen]"));

    flow.press(KeyCode::Char('f'));
    flow.absorb_one().await;
    assert!(flow.app.controller.is_full_screen());
    let text = flow.draw();
    assert!(
        !text.contains("[Show full screen]"),
        "full screen hides its own entry"
    );

    flow.press(KeyCode::Esc);
    flow.absorb_one().await;
    assert!(
        !flow.app.controller.is_full_screen(),
        "escape leaves full screen instead of quitting"
    );
    assert!(!flow.app.should_quit);
}

#[tokio::test]
async fn test_selection_shows_in_the_footer() {
    let mut flow = start_flow(30, 12);
    flow.settle().await;
    flow.draw();

    flow.press(KeyCode::Down);
    flow.press(KeyCode::Char(' '));

    let text = flow.draw();
    assert!(text.contains("Page 1 (1 selected)"));
    assert_eq!(flow.host.selected_ids().len(), 1);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_any_focus() {
    let mut flow = start_flow(5, 5);
    flow.settle().await;

    flow.press(KeyCode::Char('/'));
    flow.app
        .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(flow.app.should_quit);
}
