use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

use crate::lint::LogLevel;


/// Parses a level filter string (e.g. `info` or `swiftgen_config=debug`).
pub fn parse_level_filter(field_name: &str, filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to parse field {}", field_name))
}

/// Sets up console output and, if a directory is given, a daily rolling log file.
///
/// The returned guard flushes the log file when dropped,
/// so keep it alive until the program exits.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_output: Option<(EnvFilter, &Path)>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_filter(console_level_filter);


    let (file_layer, guard) = match log_file_output {
        Some((file_level_filter, log_file_output_directory)) => {
            std::fs::create_dir_all(log_file_output_directory)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!(
                        "Failed to create missing log directory at {}.",
                        log_file_output_directory.display()
                    )
                })?;

            let file_appender =
                tracing_appender::rolling::daily(log_file_output_directory, log_file_name);
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_appender)
                .with_filter(file_level_filter);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };


    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install the global tracing subscriber.")?;

    Ok(guard)
}

/// Default sink for lint messages: forwards them to `tracing`.
pub fn log_message(level: LogLevel, message: &str) {
    match level {
        LogLevel::Info => info!("{}", message),
        LogLevel::Warning => warn!("{}", message),
    }
}
