use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;

use gridlet::adapters::{EmbeddedResources, SampleStore, StoreHost};
use gridlet::app::App;
use gridlet::cli::{parse_args, CliCommand, CliOptions, USAGE};
use gridlet::grid::{GridController, GridOptions};
use gridlet::terminal::{setup_panic_hook, TerminalSession};
use gridlet::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highlight marker carried by the sample dataset.
const HIGHLIGHT_VALUE: &str = "1";
const HIGHLIGHT_COLOR: &str = "#d83b01";

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("gridlet {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::RunTui(options)) => options,
        Err(err) => {
            eprintln!("gridlet: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    match gridlet::logging::init() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(err) => eprintln!("warning: file logging disabled: {err}"),
    }

    ui::symbols::register_glyphs(options.ascii);

    // Restore the terminal on panic before the panic message prints.
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(options))
}

async fn run(options: CliOptions) -> Result<()> {
    // Build the store before touching the terminal so load errors print
    // to a normal shell.
    let store = match &options.data {
        Some(path) => SampleStore::from_file(path)?,
        None => SampleStore::with_sample_data(options.rows),
    }
    .with_latency(Duration::from_millis(options.latency_ms));

    tracing::info!(
        records = store.record_count(),
        page_size = options.page_size,
        latency_ms = options.latency_ms,
        "starting grid"
    );

    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let (output_tx, mut output_rx) = mpsc::unbounded_channel();

    let columns = store.columns().to_vec();
    let host = StoreHost::new(store, columns, options.page_size, update_tx)
        .with_highlight(HIGHLIGHT_VALUE, HIGHLIGHT_COLOR);

    let controller = GridController::new(Arc::new(host.clone()), output_tx, GridOptions::default());
    let mut app = App::new(controller, Arc::new(EmbeddedResources::new()));

    let mut session = TerminalSession::new()?;

    let size = session.terminal().size()?;
    app.handle_resize(size.width, size.height);

    // The first push (loading, no rows) arrives right away; the data push
    // follows once the store answers.
    host.start();

    let mut event_stream = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw {
            app.prepare();
            session.terminal().draw(|frame| ui::render(frame, &app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(width, height))) => app.handle_resize(width, height),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event stream error");
                    }
                    None => break,
                }
            }
            update = update_rx.recv() => {
                match update {
                    Some(update) => app.apply_update(update),
                    None => break,
                }
            }
            output = output_rx.recv() => {
                if let Some(output) = output {
                    app.apply_output(output);
                }
            }
        }
    }

    session.restore();
    Ok(())
}
