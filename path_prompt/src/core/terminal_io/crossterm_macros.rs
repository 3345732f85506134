// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Queue crossterm commands on a writer that is already locked (eg: the guard returned
/// by [`crate::OutputDevice::lock()`]). Nothing is flushed. Errors are converted into
/// [`miette::Report`] and returned with `?`, so this can only be used in functions that
/// return [`miette::Result`].
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            ).into_diagnostic()?;
        )*
    }}
}
