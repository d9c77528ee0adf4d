use std::{
    env::current_dir,
    path::{Path, PathBuf},
};

use miette::{miette, Context, IntoDiagnostic, Result};

/// File name looked up in the current directory when no configuration file is given.
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "swiftgen.yml";


/// Returns the default configuration filepath, which is at
/// `{current directory}/swiftgen.yml`.
///
/// The file is not required to exist; loading it reports a missing file.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let mut configuration_filepath = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;
    configuration_filepath.push(DEFAULT_CONFIGURATION_FILE_NAME);

    Ok(configuration_filepath)
}

/// Joins a relative `path` onto `base_directory`.
///
/// Absolute paths, and any path when there is no base directory, are returned as-is.
#[must_use = "function returns the rebased path"]
pub fn rebase_path(path: &Path, base_directory: Option<&Path>) -> PathBuf {
    match base_directory {
        Some(base_directory) if path.is_relative() => base_directory.join(path),
        _ => path.to_path_buf(),
    }
}
