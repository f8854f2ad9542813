//! Raw-mode terminal session
//!
//! [`TerminalSession`] owns the terminal for the lifetime of a run. Setup
//! failures undo whatever was already switched on, and teardown also runs
//! from `Drop` and from the panic hook so the shell is never left in raw mode.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Rows below the grid taken by the status bar
pub const STATUS_ROWS: u16 = 1;

pub struct TerminalSession {
    terminal: Tui,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen with the cursor hidden
    pub fn prepare() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            restore();
            return Err(e);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(e);
            }
        };

        Ok(TerminalSession {
            terminal,
            active: true,
        })
    }

    /// Usable grid size `(width, height)`: the terminal minus the status bar
    pub fn viewport(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((cols, rows.saturating_sub(STATUS_ROWS)))
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal to normal mode. Safe to call more than once.
    pub fn teardown(&mut self) -> io::Result<()> {
        let terminal = &mut self.terminal;
        deactivate(&mut self.active, || {
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            terminal.show_cursor()
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            restore();
        }
    }
}

/// Run `restore_modes` if the session is still active.
///
/// `active` is only cleared once every step succeeded, so a failed teardown
/// still gets the best-effort [`restore`] from `Drop`.
fn deactivate<F>(active: &mut bool, restore_modes: F) -> io::Result<()>
where
    F: FnOnce() -> io::Result<()>,
{
    if !*active {
        return Ok(());
    }
    restore_modes()?;
    *active = false;
    Ok(())
}

/// Best-effort restore for paths that cannot report errors
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
