// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Async path prompt
//!
//! A single line text input prompt for interactive CLI programs. It supports:
//!
//! 1. A pre-filled default value, shown dimmed next to the message. Pressing
//!    <kbd>Enter</kbd> on an empty line submits it, pressing <kbd>Tab</kbd> on an empty
//!    line adopts it for editing, and pressing <kbd>Backspace</kbd> on an empty line
//!    discards it for the rest of the session.
//! 2. Async answer validation. While the validator runs a spinner is shown in place of
//!    the prompt prefix and all keystrokes are dropped. A rejected answer is written back
//!    into the line so the user can fix it instead of retyping it.
//! 3. Filesystem path completion on <kbd>Tab</kbd>. A single match is applied in place,
//!    several matches are listed on the hint line below the prompt.
//!
//! # Architecture
//!
//! There are two layers:
//!
//! - [`mod@input_prompt`] contains the keystroke driven state machine, [`PromptState`]. It
//!   knows nothing about the terminal. It is handed one [`PromptKey`] at a time along
//!   with a [`LineBuffer`] and a [`DirectoryLister`], and it produces the two
//!   [`DisplayLines`] that the host must paint after every event.
//! - [`input_prompt_api`] is the host. It owns raw mode, the crossterm event stream,
//!   the spinner ticks, and the repaint. Call [`input_prompt_api::input_prompt()`] to
//!   run a full session against the real terminal.
//!
//! [`path_completion`] is the pure completion algorithm that [`PromptState`] runs on
//! <kbd>Tab</kbd>.
//!
//! # Example
//!
//! ```no_run
//! # use r3bl_path_prompt::{input_prompt, DefaultIoDevices, PromptConfig, Validation};
//! # async fn sample() -> miette::Result<()> {
//! let config = PromptConfig::new("Where should the report go?")
//!     .with_default("./out")
//!     .with_directory_only(true)
//!     .with_validator(|value: String| async move {
//!         if value.is_empty() {
//!             Validation::InvalidWithMessage("Please enter a folder".into())
//!         } else {
//!             Validation::Valid
//!         }
//!     });
//!
//! let mut io = DefaultIoDevices::default();
//! let maybe_answer = input_prompt(config, io.as_mut_tuple()).await?;
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod input_prompt;
pub mod input_prompt_api;
pub mod path_completion;

// Re-export.
pub use crate::core::*;
pub use input_prompt::*;
pub use input_prompt_api::*;
pub use path_completion::*;
