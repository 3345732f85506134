// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level. Use
/// [`crate::try_initialize_logging_global()`] to install it.
///
/// Any of the following can be turned into a [`TracingConfig`] with [`Into`], and two
/// configs can be merged with `+`:
///
/// ```
/// use r3bl_path_prompt::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// let config_4: TracingConfig = WriterConfig::File("prompt.log".to_string()).into();
///
/// // The more verbose level wins.
/// let merged = config_2 + config_4;
/// assert_eq!(merged.level_filter, tracing_core::LevelFilter::DEBUG);
/// # let _ = (config_1, config_3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// The file path and prefix to use for the log file. Eg: `/tmp/path_prompt.log`.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The merged level filter is the more verbose of the two. The writer configs are merged
/// with [`WriterConfig`]'s `+`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// The `rhs` clobbers `self` where both say the same thing, and the two are combined
/// into [`WriterConfig::DisplayAndFile`] where one has a display and the other a file.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};
        match (self, rhs) {
            (lhs, None) => lhs,
            (None, rhs) => rhs,
            (Display(_), Display(d)) => Display(d),
            (File(_), File(f)) => File(f),
            (Display(d), File(f)) | (File(f), Display(d)) => DisplayAndFile(d, f),
            (DisplayAndFile(_, f), Display(d)) => DisplayAndFile(d, f),
            (DisplayAndFile(d, _), File(f)) => DisplayAndFile(d, f),
            (_, DisplayAndFile(d, f)) => DisplayAndFile(d, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(WriterConfig::None, WriterConfig::File("b".into()), WriterConfig::File("b".into()))]
    #[test_case(WriterConfig::File("a".into()), WriterConfig::None, WriterConfig::File("a".into()))]
    #[test_case(WriterConfig::File("a".into()), WriterConfig::File("b".into()), WriterConfig::File("b".into()))]
    #[test_case(
        WriterConfig::Display(DisplayPreference::Stdout),
        WriterConfig::File("b".into()),
        WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b".into())
    )]
    #[test_case(
        WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a".into()),
        WriterConfig::Display(DisplayPreference::Stderr),
        WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a".into())
    )]
    fn test_merge_writer_config(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq!(lhs + rhs, expected);
    }

    #[test]
    fn test_merge_tracing_config_picks_more_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = DisplayPreference::Stderr.into();
        let merged = lhs + rhs;
        assert_eq!(merged.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            merged.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
