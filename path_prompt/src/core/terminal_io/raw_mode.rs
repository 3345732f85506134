// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic as _;

/// RAII guard that disables raw mode when dropped, so the terminal is restored on every
/// exit path out of a prompt session (answer, error, or interrupt).
///
/// When the session is driven by a mock [`crate::OutputDevice`] (in tests) the terminal
/// is never touched, and this guard does nothing.
#[derive(Debug)]
pub struct RawModeGuard {
    is_mock: bool,
}

impl RawModeGuard {
    /// Create a new guard and enable raw mode (unless `is_mock` is set).
    ///
    /// # Errors
    ///
    /// Returns an error if crossterm can't put the terminal into raw mode.
    pub fn try_new(is_mock: bool) -> miette::Result<Self> {
        if !is_mock {
            crossterm::terminal::enable_raw_mode().into_diagnostic()?;
            tracing::debug!(message = "EnterRawMode -> enable_raw_mode()");
        }
        Ok(RawModeGuard { is_mock })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.is_mock {
            return;
        }
        // We don't care about the result of this operation.
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            tracing::error!(message = "ExitRawMode -> disable_raw_mode() failed", ?err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_guard_does_not_touch_terminal() {
        let guard = RawModeGuard::try_new(true).unwrap();
        assert!(guard.is_mock);
        drop(guard);
    }
}
