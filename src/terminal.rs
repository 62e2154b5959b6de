use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs a release action at most once: on the first explicit `release`, or
/// on drop if it was never called.
pub struct ReleaseOnce<F: FnOnce() -> io::Result<()>> {
    release: Option<F>,
}

impl<F: FnOnce() -> io::Result<()>> ReleaseOnce<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }

    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }

    pub fn release(&mut self) -> io::Result<()> {
        match self.release.take() {
            Some(release) => release(),
            None => Ok(()),
        }
    }
}

impl<F: FnOnce() -> io::Result<()>> Drop for ReleaseOnce<F> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            log::error!("failed to release terminal: {err}");
        }
    }
}

fn leave_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    );
    log::debug!("terminal restored");
    raw.and(screen)
}

/// Owns the terminal for the lifetime of the dashboard. Raw mode and the
/// alternate screen are left exactly once, whichever way the process exits.
pub struct TerminalGuard {
    terminal: CrosstermTerminal,
    restore: ReleaseOnce<fn() -> io::Result<()>>,
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on the guard's drop undoes raw mode even if setup fails.
        let restore = ReleaseOnce::new(leave_terminal as fn() -> io::Result<()>);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        log::debug!("terminal acquired");
        Ok(Self { terminal, restore })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    pub fn restore(&mut self) -> io::Result<()> {
        self.restore.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn explicit_release_runs_once_and_drop_is_noop() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut guard = ReleaseOnce::new(move || {
            counter.set(counter.get() + 1);
            Ok(())
        });
        guard.release().unwrap();
        guard.release().unwrap();
        assert!(guard.is_released());
        drop(guard);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_releases_when_never_called() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        {
            let _guard = ReleaseOnce::new(move || {
                counter.set(counter.get() + 1);
                Ok(())
            });
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn failed_release_is_not_retried() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut guard = ReleaseOnce::new(move || {
            counter.set(counter.get() + 1);
            Err(io::Error::other("tty gone"))
        });
        assert!(guard.release().is_err());
        drop(guard);
        assert_eq!(count.get(), 1);
    }
}
