//! Command-line interface definitions for the linter binary.

use std::path::PathBuf;

use clap::Parser;



/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "swiftgen-config",
    author,
    about = "Validates a swiftgen configuration file and prints the equivalent swiftgen invocations.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./swiftgen.yml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to use. Defaults to ./swiftgen.yml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "command",
        value_name = "NAME",
        help = "Command to collect entries for; may be repeated. \
                If unspecified, all commands built into swiftgen are used."
    )]
    pub commands: Vec<String>,

    #[arg(
        long = "console-log-level",
        default_value = "info",
        help = "Level filter for console output, in tracing's EnvFilter syntax."
    )]
    pub console_log_level: String,

    #[arg(
        long = "log-file-directory",
        help = "If set, logs are additionally written to a daily rolling file in this directory."
    )]
    pub log_file_directory: Option<PathBuf>,

    #[arg(
        long = "log-file-level",
        default_value = "debug",
        help = "Level filter for the log file, in tracing's EnvFilter syntax."
    )]
    pub log_file_level: String,
}
