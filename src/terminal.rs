//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen are entered once at startup and must be
//! restored on every exit path, including panics.

use std::io::{self, Stdout, Write};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// RAII session wrapping the ratatui terminal.
///
/// Restores the terminal on drop so early returns and `?` exits leave the
/// shell usable. The panic path is covered separately by [`setup_panic_hook`].
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, then clear the backing buffer.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Mutable access to the underlying terminal for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal ahead of drop. Subsequent calls are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        restore_terminal(&mut io::stdout());
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Leave the alternate screen and return the terminal to cooked mode.
///
/// Ignores errors so it stays callable from panic and error paths.
pub fn restore_terminal<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the default hook
/// prints the panic message.
///
/// Call this early in `main()`, before creating the [`TerminalSession`].
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal(&mut io::stdout());
        original_hook(panic_info);
    }));
}
