// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic as _;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt as _, registry::LookupSpan,
                         util::SubscriberInitExt as _};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use crate::ok;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the tracing subscriber described by `options` for the whole process.
///
/// Logging is disabled unless this is called with a level filter other than
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    let Some(layers) = try_create_layers(&config)? else {
        return ok!();
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, handy for tests, since each test thread can get its own.
/// Drop the returned guard to uninstall it.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let Some(layers) = try_create_layers(&config)? else {
        return Ok(None);
    };

    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers. This does not initialize the tracing system. Returns [None] when
/// there is nowhere to write to ([`WriterConfig::None`]).
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if matches!(config.writer_config, WriterConfig::None) {
        return Ok(None);
    }

    let level_filter = config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for the whole subscriber. This is needed if more layers that
    // don't have a level filter of their own are added.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, config.get_writer_config())? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, config.get_writer_config())? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// This function does not fail today, the [`miette::Result`] keeps its signature in step
/// with [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _) | WriterConfig::Display(display_pref) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer.with_writer(std::io::stdout).with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer.with_writer(std::io::stderr).with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path_and_prefix)
        | WriterConfig::File(tracing_log_file_path_and_prefix) => {
            let file = rolling_file_appender_impl::try_create(
                tracing_log_file_path_and_prefix.as_str(),
            )?;
            Some(Box::new(fmt_layer.with_writer(file).with_filter(level_filter)))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            )
            .unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_no_layers_when_nowhere_to_write() {
        let config: TracingConfig = WriterConfig::None.into();
        assert!(try_create_layers(&config).unwrap().is_none());
    }

    #[test]
    fn test_thread_local_logging_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        {
            let guard = try_initialize_logging_thread_local(TracingConfig::new_file(
                Some(file_path_str),
                LevelFilter::DEBUG,
            ))
            .unwrap();
            assert!(guard.is_some());
            tracing::debug!(message = "hello from the prompt");
        }

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("hello from the prompt"));
    }

    #[test]
    fn test_logging_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }
}
