// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::EventStream;
use futures_util::{FutureExt, StreamExt};

use crate::{CrosstermEventResult, PinnedInputStream};

/// This struct represents an input device that can be used to read from the terminal. See
/// [`crate::InputDeviceExtMock`] for testing features.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }
}

impl InputDevice {
    /// Returns [None] when the underlying stream has ended. This is how a mock input
    /// device signals that it has no more events to give.
    pub async fn next(&mut self) -> Option<CrosstermEventResult> {
        self.resource.next().fuse().await
    }
}
