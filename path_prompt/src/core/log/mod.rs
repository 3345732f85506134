// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. A prompt owns the terminal while it is on
//! screen, so log output that goes to `stdout` would clobber the prompt. Log to a file
//! (see [`WriterConfig::File`]) when a prompt is active.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
