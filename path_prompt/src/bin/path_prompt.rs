// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ask for a path on the command line, with <kbd>Tab</kbd> completion, and print the
//! answer to stdout.
//!
//! ```text
//! path_prompt --message "Where should the report go?" --default ./out --directory-only
//! ```

use clap::Parser as _;
use r3bl_path_prompt::{CompletionOrder, DefaultIoDevices, PromptConfig, TracingConfig,
                       Validation, input_prompt, try_initialize_logging_global};
use tracing_core::LevelFilter;

use crate::clap_config::CLIArgs;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    let enable_logging = cli_args.global_options.enable_logging;
    if enable_logging {
        // Only log to a file, the prompt owns the terminal.
        try_initialize_logging_global(TracingConfig::new_file(None, LevelFilter::DEBUG))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
    }

    let config = create_prompt_config(&cli_args);
    let mut io = DefaultIoDevices::default();
    let maybe_answer = input_prompt(config, io.as_mut_tuple()).await?;

    match maybe_answer {
        Some(answer) => println!("{answer}"),
        None => eprintln!("Terminal is not interactive, nothing to ask."),
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}

fn create_prompt_config(cli_args: &CLIArgs) -> PromptConfig {
    let mut config = PromptConfig::new(cli_args.message.clone())
        .with_directory_only(cli_args.directory_only)
        .with_completion_order(if cli_args.sort_completions {
            CompletionOrder::Sorted
        } else {
            CompletionOrder::AsListed
        });

    if let Some(default_value) = &cli_args.default_value {
        config = config.with_default(default_value.clone());
    }

    if cli_args.must_exist {
        config = config.with_validator(|value: String| async move {
            match tokio::fs::try_exists(&value).await {
                Ok(true) => Validation::Valid,
                Ok(false) => Validation::InvalidWithMessage(format!("{value} does not exist")),
                Err(err) => Validation::InvalidWithMessage(err.to_string()),
            }
        });
    }

    config
}

mod clap_config {
    use clap::{Args, Parser};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "path_prompt")]
    #[command(about = "Ask for a path, with Tab completion, and print it 📂")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArgs {
        #[arg(
            long,
            short = 'm',
            default_value = "Path?",
            help = "The question to ask."
        )]
        pub message: String,

        #[arg(
            long = "default",
            short = 'd',
            help = "Submitted when Enter is pressed on an empty line. Tab on an empty line \
                    adopts it for editing."
        )]
        pub default_value: Option<String>,

        #[arg(long, help = "Only complete folder names.")]
        pub directory_only: bool,

        #[arg(long, help = "Reject answers that don't exist on disk.")]
        pub must_exist: bool,

        #[arg(
            long,
            help = "List ambiguous completions in sorted order, instead of the order the \
                    filesystem returns them in."
        )]
        pub sort_completions: bool,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }
}
