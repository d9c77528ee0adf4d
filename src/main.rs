use clap::Parser;
use miette::{Context, Result};
use tracing::info;

use swiftgen_config::{
    configuration::{get_default_configuration_file_path, Config, DEFAULT_COMMANDS},
    logging::{initialize_tracing, log_message, parse_level_filter},
};

use crate::cli::CLIArgs;

mod cli;


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let console_level_filter =
        parse_level_filter("console-log-level", &cli_args.console_log_level)?;

    let log_file_output = match cli_args.log_file_directory.as_deref() {
        Some(directory) => Some((
            parse_level_filter("log-file-level", &cli_args.log_file_level)?,
            directory,
        )),
        None => None,
    };

    let logging_raii_guard = initialize_tracing(
        console_level_filter,
        log_file_output,
        "swiftgen-config.log",
    )
    .wrap_err("Failed to initialize tracing.")?;


    let configuration_file_path = match cli_args.configuration_file_path {
        Some(path) => path,
        None => get_default_configuration_file_path()?,
    };

    let commands: Vec<&str> = if cli_args.commands.is_empty() {
        DEFAULT_COMMANDS.to_vec()
    } else {
        cli_args.commands.iter().map(String::as_str).collect()
    };


    info!(
        "Loading configuration: {}",
        configuration_file_path.display()
    );

    let configuration = Config::load_with_commands(&configuration_file_path, &commands)
        .wrap_err("Failed to load configuration file.")?;

    info!(
        "Configuration loaded: {} ({} entries).",
        configuration.file_path.display(),
        configuration.entry_count()
    );

    configuration.lint(log_message);


    drop(logging_raii_guard);
    Ok(())
}
