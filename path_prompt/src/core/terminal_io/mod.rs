// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_macros;
pub mod input_device;
pub mod output_device;
pub mod raw_mode;
pub mod terminal_io_type_aliases;

// Re-export.
pub use input_device::*;
pub use output_device::*;
pub use raw_mode::*;
pub use terminal_io_type_aliases::*;
