// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState,
                       KeyModifiers};

use crate::{CrosstermEventResult, InlineVec, InputDevice, PinnedInputStream};

pub fn gen_input_stream<T>(generator_vec: InlineVec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

pub fn gen_input_stream_with_delay<T>(
    generator_vec: InlineVec<T>,
    delay: Duration,
) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

pub trait InputDeviceExtMock {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice;

    fn new_mock_with_delay(
        generator_vec: InlineVec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice {
        InputDevice {
            resource: gen_input_stream(generator_vec),
        }
    }

    fn new_mock_with_delay(
        generator_vec: InlineVec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice {
        InputDevice {
            resource: gen_input_stream_with_delay(generator_vec, delay),
        }
    }
}

/// Shorthand to build a key press event, for use with [`InputDeviceExtMock`].
#[must_use]
pub fn key_press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }))
}

/// One plain key press event per character of `text`.
#[must_use]
pub fn typed(text: &str) -> InlineVec<CrosstermEventResult> {
    text.chars()
        .map(|ch| key_press(KeyCode::Char(ch), KeyModifiers::NONE))
        .collect()
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;
    use smallvec::smallvec;

    use super::*;

    #[tokio::test]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(smallvec![1, 2, 3]);
        for _ in 1..=3 {
            input_stream.next().await;
        }
        pretty_assertions::assert_eq!(input_stream.next().await, None);
    }

    #[tokio::test]
    async fn test_mock_input_device_ends() {
        let mut device = InputDevice::new_mock(typed("ab"));
        assert!(device.next().await.is_some());
        assert!(device.next().await.is_some());
        assert!(device.next().await.is_none());
    }
}
