use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tracing::debug;

use super::{
    commands::DEFAULT_COMMANDS,
    entry::Entry,
    error::ConfigError,
    format::DocumentFormat,
    traits::ResolvableConfigurationWithContext,
    value::{DynamicMapping, DynamicValue},
};


/// Top-level keys that are not commands.
pub mod keys {
    pub const INPUT_DIR: &str = "input_dir";
    pub const OUTPUT_DIR: &str = "output_dir";
}


/// A parsed document together with the commands to look for in it.
pub(crate) struct UnresolvedConfiguration<'a> {
    document: &'a DynamicValue,

    commands: &'a [&'a str],
}


/// The entire configuration.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    /// This is the file path this `Config` instance was loaded from.
    pub file_path: PathBuf,

    /// Common parent directory of all relative input paths.
    pub input_dir: Option<PathBuf>,

    /// Common parent directory of all relative output paths.
    pub output_dir: Option<PathBuf>,

    /// Entries per command, in command registry order.
    pub commands: IndexMap<String, Vec<Entry>>,
}


fn optional_directory(root: &DynamicMapping, key: &str) -> Option<PathBuf> {
    root.get(key)
        .and_then(DynamicValue::as_str)
        .map(PathBuf::from)
}

impl ResolvableConfigurationWithContext for UnresolvedConfiguration<'_> {
    type Resolved = Config;
    type Context = PathBuf;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved, ConfigError> {
        let root = self.document.as_mapping().ok_or_else(|| {
            ConfigError::wrong_type(None::<String>, "Dictionary", self.document.type_name())
        })?;

        let input_dir = optional_directory(root, keys::INPUT_DIR);
        let output_dir = optional_directory(root, keys::OUTPUT_DIR);


        let mut commands = IndexMap::new();
        for &command in self.commands {
            let Some(command_value) = root.get(command) else {
                continue;
            };

            let entries = Entry::parse_command_entry(command_value)
                .map_err(|error| error.with_key_prefixed(command))?;

            debug!(
                "Parsed {} entries for command {}.",
                entries.len(),
                command
            );
            commands.insert(command.to_string(), entries);
        }


        Ok(Config {
            file_path: context,
            input_dir,
            output_dir,
            commands,
        })
    }
}


impl Config {
    /// Load the configuration from a specific file path,
    /// looking for the [default commands][DEFAULT_COMMANDS].
    pub fn load<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self, ConfigError> {
        Self::load_with_commands(configuration_file_path, DEFAULT_COMMANDS)
    }

    /// Load the configuration from a specific file path, collecting entries
    /// for each of `commands` present in the file.
    pub fn load_with_commands<S: AsRef<Path>>(
        configuration_file_path: S,
        commands: &[&str],
    ) -> Result<Self, ConfigError> {
        let configuration_file_path = configuration_file_path.as_ref();

        if !configuration_file_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: configuration_file_path.to_path_buf(),
            });
        }

        // Read the configuration file into memory.
        let configuration_string =
            fs::read_to_string(configuration_file_path).map_err(|source| ConfigError::Read {
                path: configuration_file_path.to_path_buf(),
                source,
            })?;


        let document = DocumentFormat::from_path(configuration_file_path)
            .parse(&configuration_string)
            .map_err(|message| ConfigError::Parse {
                path: configuration_file_path.to_path_buf(),
                message,
            })?;


        let canonical_file_path =
            dunce::canonicalize(configuration_file_path).map_err(|source| ConfigError::Read {
                path: configuration_file_path.to_path_buf(),
                source,
            })?;

        Self::from_document(&document, commands, canonical_file_path)
    }

    /// Validate an already-parsed document.
    pub fn from_document(
        document: &DynamicValue,
        commands: &[&str],
        file_path: PathBuf,
    ) -> Result<Self, ConfigError> {
        UnresolvedConfiguration { document, commands }.resolve(file_path)
    }

    /// Total number of entries across all commands.
    pub fn entry_count(&self) -> usize {
        self.commands.values().map(Vec::len).sum()
    }
}
