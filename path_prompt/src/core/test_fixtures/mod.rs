// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures used by the unit tests in this crate and by the integration tests in the
//! `tests` folder. They are public so that integration tests can reach them.

// Attach.
pub mod fake_directory;
pub mod input_device_fixtures;
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use fake_directory::*;
pub use input_device_fixtures::*;
pub use stdout_mock::*;
pub use temp_dir::*;
