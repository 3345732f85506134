// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::PromptStatus;

pub const DELAY_MS: u64 = 85;
pub const DELAY_UNIT: Duration = Duration::from_millis(DELAY_MS);

/// More info: <https://www.unicode.org/charts/script/chart_Braille.html>
pub const BRAILLE_DOTS: [&str; 34] = [
    "⠁", "⠃", "⡇", "⠇", "⡎", "⢟", "⡯", "⡗", "⡞", "⡟", "⡷", "⡾", "⡾", "⣕", "⣗", "⣝", "⡣",
    "⡮", "⡯", "⡳", "⡵", "⣞", "⣟", "⣧", "⣮", "⣯", "⣷", "⣿", "⣼", "⡟", "⡏", "⠇", "⠃", "⠁",
];

pub const PENDING_MARKER: &str = "?";
pub const DONE_MARKER: &str = "✔";

/// The glyph painted in front of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptPrefix;

impl PromptPrefix {
    /// `tick` is the number of spinner ticks since validation started. It is ignored
    /// unless `status` is [`PromptStatus::Validating`].
    #[must_use]
    pub fn for_status(status: PromptStatus, tick: usize) -> &'static str {
        match status {
            PromptStatus::Pending => PENDING_MARKER,
            PromptStatus::Validating => BRAILLE_DOTS[tick % BRAILLE_DOTS.len()],
            PromptStatus::Done => DONE_MARKER,
        }
    }
}
