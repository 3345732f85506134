// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Filesystem path completion, run by [`crate::PromptState`] when <kbd>Tab</kbd> is
//! pressed on a non empty line.
//!
//! The algorithm is a pure function of the typed value, the `directory_only` flag, and
//! a [`DirectoryLister`]. The lister is injected so that tests can use an in memory
//! [`crate::FakeDirectory`] instead of the real disk.

// Attach sources.
pub mod completion_engine;
pub mod directory_lister;

// Re-export.
pub use completion_engine::*;
pub use directory_lister::*;
