//! Terminal Teardown
//!
//! Raw mode, mouse capture, focus reporting and the alternate screen must be
//! switched off however the binary exits. [`TerminalGuard`] does it on drop,
//! so a `?` anywhere after raw mode is enabled still leaves a usable shell.

use std::io;

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Put the terminal back the way the shell expects it
///
/// Errors are ignored: this runs from `Drop` and from the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

/// Restores the terminal when dropped
#[must_use = "the terminal is restored as soon as the guard is dropped"]
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    /// Guard that runs [`restore_terminal`]
    pub fn new() -> Self {
        Self::with_restore(restore_terminal)
    }

    /// Guard that runs `restore` instead
    pub fn with_restore(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() {
        RESTORES.fetch_add(1, Ordering::SeqCst);
    }

    fn start(backend_fails: bool) -> io::Result<u16> {
        let _guard = TerminalGuard::with_restore(count_restore);
        if backend_fails {
            return Err(io::Error::other("backend unavailable"));
        }
        Ok(80)
    }

    #[test]
    fn test_restores_on_early_error_and_normal_exit() {
        assert!(start(true).is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        assert_eq!(start(false).unwrap(), 80);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2);
    }
}
