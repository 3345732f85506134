// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The keystroke driven state machine behind the prompt.
//!
//! Nothing in here touches the terminal. The host hands [`PromptState::handle_key()`]
//! one [`PromptKey`] at a time, along with the [`LineBuffer`] it is editing, and then
//! paints the [`DisplayLines`] that [`PromptState::render()`] produces. Submitting an
//! answer hands a candidate back to the host, which runs the validator and reports the
//! verdict with [`PromptState::resolve_validation()`].
//!
//! ```text
//!            Enter                      Valid
//! Pending ─────────────▶ Validating ─────────────▶ Done
//!    ▲                       │
//!    └───────────────────────┘
//!       Invalid / InvalidWithMessage
//! ```

// Attach sources.
pub mod display_lines;
pub mod line_buffer;
pub mod prompt_config;
pub mod prompt_key;
pub mod prompt_prefix;
pub mod prompt_state;
pub mod validation;

// Re-export.
pub use display_lines::*;
pub use line_buffer::*;
pub use prompt_config::*;
pub use prompt_key::*;
pub use prompt_prefix::*;
pub use prompt_state::*;
pub use validation::*;
