// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal host for [`PromptState`]. It owns raw mode, the crossterm event stream,
//! the spinner, and the repaint. Use [`input_prompt()`] for the real filesystem, and
//! [`input_prompt_with_lister()`] to complete paths from somewhere else.

use std::io::{self, Write as _};

use crossterm::{cursor::{MoveToColumn, MoveUp},
                event::{Event, KeyEventKind},
                style::Print,
                terminal::{Clear, ClearType}};
use miette::{Diagnostic, IntoDiagnostic as _};
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use unicode_segmentation::UnicodeSegmentation as _;

use crate::{AbortKey, AnsiEmphasis, DELAY_UNIT, DirectoryLister, DisplayLines,
            FsDirectoryLister, InputDevice, KeyOutcome, LineEditor,
            OutputDevice, PromptConfig, PromptKey, PromptPrefix, PromptState, RawModeGuard,
            StdinIsPipedResult, StdoutIsPipedResult, TTYResult, Validation,
            ValidationFuture, is_fully_uninteractive_terminal, is_stdin_piped,
            is_stdout_piped, queue_commands_no_lock};

/// Ways a prompt session can end without an answer.
#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    /// Reading events from, or writing to, the terminal failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_path_prompt::io_error))]
    IO(#[from] io::Error),

    #[error("Prompt interrupted with Ctrl+C")]
    #[diagnostic(code(r3bl_path_prompt::interrupted))]
    Interrupted,

    #[error("Prompt ended with Ctrl+D")]
    #[diagnostic(code(r3bl_path_prompt::eof))]
    Eof,

    #[error("Input stream closed before an answer was accepted")]
    #[diagnostic(
        code(r3bl_path_prompt::input_closed),
        help("The input device ran out of events. This is usually a mock input device.")
    )]
    InputClosed,
}

impl From<AbortKey> for PromptError {
    fn from(abort_key: AbortKey) -> Self {
        match abort_key {
            AbortKey::Interrupt => PromptError::Interrupted,
            AbortKey::EndOfInput => PromptError::Eof,
        }
    }
}

/// This struct is provided for convenience to create a default set of IO devices which
/// can be used in the [`input_prompt()`] function. Mutable references to these devices
/// are passed to it, so they have to be created outside of it.
#[allow(missing_debug_implementations)]
pub struct DefaultIoDevices {
    pub output_device: OutputDevice,
    pub input_device: InputDevice,
}

impl Default for DefaultIoDevices {
    fn default() -> Self {
        DefaultIoDevices {
            output_device: OutputDevice::new_stdout(),
            input_device: InputDevice::new_event_stream(),
        }
    }
}

impl DefaultIoDevices {
    pub fn as_mut_tuple(&mut self) -> (&mut OutputDevice, &mut InputDevice) {
        (&mut self.output_device, &mut self.input_device)
    }
}

/// Ask the user a question, with <kbd>Tab</kbd> completing paths on the real
/// filesystem. See [`input_prompt_with_lister()`].
///
/// # Errors
///
/// See [`input_prompt_with_lister()`].
pub async fn input_prompt(
    config: PromptConfig,
    io: (&mut OutputDevice, &mut InputDevice),
) -> miette::Result<Option<String>> {
    input_prompt_with_lister(config, io, &FsDirectoryLister).await
}

/// Ask the user a question and return the validated answer.
///
/// If the terminal is not interactive (stdin or stdout is piped, or none of the standard
/// streams are a TTY) this returns `Ok(None)` right away, so it won't block `cargo test`
/// or CI/CD environments. This check is skipped when the output device is a mock.
///
/// # Arguments
///
/// * `config` - The message, default, validator, etc.
/// * `io` - The output and input devices to use. Call
///   [`DefaultIoDevices::as_mut_tuple()`] if you don't want to specify anything here.
/// * `lister` - Used to look inside folders when completing paths.
///
/// # Errors
///
/// Returns a [`PromptError`] (as a [`miette::Report`]) if the user presses
/// <kbd>Ctrl+C</kbd> or <kbd>Ctrl+D</kbd>, if the input stream ends before an answer
/// was accepted, or if terminal IO fails.
pub async fn input_prompt_with_lister<L: DirectoryLister>(
    config: PromptConfig,
    io: (&mut OutputDevice, &mut InputDevice),
    lister: &L,
) -> miette::Result<Option<String>> {
    // Destructure the io tuple.
    let (output_device, input_device) = io;

    if !output_device.is_mock && !is_interactive_terminal() {
        tracing::debug!(message = "input_prompt -> terminal is not interactive");
        return Ok(None);
    }

    tracing::info!(message = "input_prompt -> start", prompt = %config.message);

    let _raw_mode = RawModeGuard::try_new(output_device.is_mock)?;

    let mut session = PromptSession {
        state: PromptState::new(&config),
        config,
        editor: LineEditor::default(),
        lister,
        output_device,
        spinner_tick: 0,
    };

    let result = run_event_loop(&mut session, input_device).await;

    // Leave the prompt line on screen and move below it, whatever happened.
    let painted = paint_final(session.output_device, &session.lines().prompt_line);

    tracing::info!(message = "input_prompt -> end", ?result);

    let answer = result?;
    painted?;
    Ok(Some(answer))
}

fn is_interactive_terminal() -> bool {
    matches!(is_fully_uninteractive_terminal(), TTYResult::IsInteractive)
        && matches!(is_stdin_piped(), StdinIsPipedResult::StdinIsNotPiped)
        && matches!(is_stdout_piped(), StdoutIsPipedResult::StdoutIsNotPiped)
}

struct PromptSession<'a, L: DirectoryLister> {
    config: PromptConfig,
    state: PromptState,
    editor: LineEditor,
    lister: &'a L,
    output_device: &'a OutputDevice,
    /// Ticks since the validator started. Picks the spinner glyph.
    spinner_tick: usize,
}

impl<L: DirectoryLister> PromptSession<'_, L> {
    fn lines(&self) -> DisplayLines {
        let prefix = PromptPrefix::for_status(self.state.status(), self.spinner_tick);
        self.state.render(&self.config, prefix, &AnsiEmphasis)
    }

    fn repaint(&self) -> miette::Result<()> {
        paint(
            self.output_device,
            &self.lines(),
            self.editor.text_after_cursor(),
        )
    }
}

async fn run_event_loop<L: DirectoryLister>(
    session: &mut PromptSession<'_, L>,
    input_device: &mut InputDevice,
) -> miette::Result<String> {
    session.repaint()?;

    loop {
        let Some(maybe_event) = input_device.next().await else {
            return Err(PromptError::InputClosed.into());
        };
        let Event::Key(key_event) = maybe_event.map_err(PromptError::IO)? else {
            continue;
        };
        if key_event.kind == KeyEventKind::Release {
            continue;
        }
        if let Some(abort_key) = AbortKey::try_from_key_event(&key_event) {
            return Err(PromptError::from(abort_key).into());
        }

        session.editor.apply_key(&key_event);
        let outcome = session.state.handle_key(
            PromptKey::from(&key_event),
            &mut session.editor,
            &session.config,
            session.lister,
        );

        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => session.repaint()?,
            KeyOutcome::Submit(candidate) => {
                session.spinner_tick = 0;
                session.repaint()?;

                let validation_future = session.config.validate(candidate);
                let validation =
                    await_validation(session, input_device, validation_future).await?;
                session.state.resolve_validation(validation, &mut session.editor);

                if let Some(answer) = session.state.final_answer() {
                    return Ok(answer.to_string());
                }
                session.repaint()?;
            }
        }
    }
}

/// Race the validator against spinner ticks and input. Keys are dropped, except for the
/// ones that abort the session. If the input stream ends, keep waiting for the validator.
async fn await_validation<L: DirectoryLister>(
    session: &mut PromptSession<'_, L>,
    input_device: &mut InputDevice,
    mut validation_future: ValidationFuture,
) -> miette::Result<Validation> {
    let mut interval = tokio::time::interval(DELAY_UNIT);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    interval.tick().await;

    let mut input_is_open = true;

    loop {
        tokio::select! {
            biased;

            validation = &mut validation_future => {
                tracing::debug!(message = "await_validation -> resolved", ?validation);
                return Ok(validation);
            }

            _ = interval.tick() => {
                session.spinner_tick = session.spinner_tick.wrapping_add(1);
                session.repaint()?;
            }

            maybe_event = input_device.next(), if input_is_open => {
                match maybe_event {
                    None => input_is_open = false,
                    Some(Err(err)) => return Err(PromptError::IO(err).into()),
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(abort_key) = AbortKey::try_from_key_event(&key_event) {
                            return Err(PromptError::from(abort_key).into());
                        }
                        tracing::debug!(message = "await_validation -> key dropped", ?key_event);
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }
}

/// Paint both lines, starting on the prompt row. The cursor is left on the prompt row,
/// just before `text_after_cursor`, so the next paint can clear from there down.
fn paint(
    output_device: &OutputDevice,
    lines: &DisplayLines,
    text_after_cursor: &str,
) -> miette::Result<()> {
    let mut guard = output_device.lock();
    let out: &mut dyn io::Write = &mut *guard;

    queue_commands_no_lock!(
        out,
        MoveToColumn(0),
        Clear(ClearType::FromCursorDown),
        Print(&lines.prompt_line),
    );

    if !lines.hint_line.is_empty() {
        let mut hint_rows: u16 = 0;
        for row in lines.hint_line.split('\n') {
            queue_commands_no_lock!(out, Print("\r\n"), Print(row));
            hint_rows = hint_rows.saturating_add(1);
        }
        queue_commands_no_lock!(out, MoveUp(hint_rows));
    }

    let col = display_width(&lines.prompt_line).saturating_sub(display_width(text_after_cursor));
    queue_commands_no_lock!(out, MoveToColumn(u16::try_from(col).unwrap_or(u16::MAX)));

    out.flush().into_diagnostic()
}

/// Paint only the prompt line, drop the hint line, and move to the next row.
fn paint_final(output_device: &OutputDevice, prompt_line: &str) -> miette::Result<()> {
    let mut guard = output_device.lock();
    let out: &mut dyn io::Write = &mut *guard;

    queue_commands_no_lock!(
        out,
        MoveToColumn(0),
        Clear(ClearType::FromCursorDown),
        Print(prompt_line),
        Print("\r\n"),
    );

    out.flush().into_diagnostic()
}

/// Number of grapheme clusters, ignoring ANSI escape sequences.
fn display_width(text: &str) -> usize {
    let stripped = strip_ansi_escapes::strip(text.as_bytes());
    String::from_utf8_lossy(&stripped).graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Emphasize as _, OutputDeviceExt as _, StyleRole};

    #[test]
    fn test_display_width_ignores_ansi() {
        let styled = AnsiEmphasis.emphasize("abc", StyleRole::Message);
        assert_eq!(display_width(&styled), 3);
        assert_eq!(display_width("a👍🏽"), 2);
    }

    #[test]
    fn test_paint_moves_back_up_over_hint_rows() {
        let (device, mock) = OutputDevice::new_mock();
        let lines = DisplayLines {
            prompt_line: "? Path? rep".into(),
            hint_line: "report.csv\nreport2.txt".into(),
        };
        paint(&device, &lines, "").unwrap();

        let raw = mock.get_copy_of_buffer_as_string();
        // MoveUp(2).
        assert!(raw.contains("\x1b[2A"));
        assert_eq!(
            mock.get_copy_of_buffer_as_string_strip_ansi()
                .lines()
                .collect::<Vec<_>>(),
            vec!["? Path? rep", "report.csv", "report2.txt"]
        );
    }

    #[test]
    fn test_abort_keys_map_to_errors() {
        assert!(matches!(
            PromptError::from(AbortKey::Interrupt),
            PromptError::Interrupted
        ));
        assert!(matches!(PromptError::from(AbortKey::EndOfInput), PromptError::Eof));
    }
}
