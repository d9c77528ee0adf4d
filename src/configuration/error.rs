//! Error types for configuration loading.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;


/// Everything that can go wrong while loading a configuration file.
///
/// Keys are dotted paths into the document (e.g. `strings.output`);
/// they grow as an error bubbles up through [`ConfigError::with_key_prefixed`].
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    /// A required key is absent.
    #[error("Missing entry for key {key}.")]
    #[diagnostic(
        code(config::missing_entry),
        help("Add the missing key to your configuration file.")
    )]
    MissingEntry { key: String },

    /// A value is present but has the wrong shape. `key` is `None` at the document root.
    #[error(
        "Wrong type for key {}: expected {expected}, got {actual}.",
        .key.as_deref().unwrap_or("root")
    )]
    #[diagnostic(code(config::wrong_type))]
    WrongType {
        key: Option<String>,
        expected: String,
        actual: String,
    },

    /// The configuration file itself does not exist.
    #[error("File {} not found.", .path.display())]
    #[diagnostic(
        code(config::path_not_found),
        help("Pass the path of an existing configuration file.")
    )]
    PathNotFound { path: PathBuf },

    /// The configuration file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    #[diagnostic(code(config::read))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document parser rejected the file contents.
    #[error("Failed to parse {}: {message}", .path.display())]
    #[diagnostic(code(config::parse))]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn wrong_type<K, E>(key: Option<K>, expected: E, actual: &str) -> Self
    where
        K: Into<String>,
        E: Into<String>,
    {
        Self::WrongType {
            key: key.map(Into::into),
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }

    /// Prepends `prefix` to the dotted key this error refers to.
    ///
    /// Errors without a key are returned unchanged.
    #[must_use = "function returns the re-keyed error"]
    pub fn with_key_prefixed(self, prefix: &str) -> Self {
        match self {
            Self::MissingEntry { key } => Self::MissingEntry {
                key: format!("{prefix}.{key}"),
            },
            Self::WrongType {
                key,
                expected,
                actual,
            } => {
                let full_key = [Some(prefix), key.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(".");

                Self::WrongType {
                    key: Some(full_key),
                    expected,
                    actual,
                }
            }
            other => other,
        }
    }

    /// The dotted key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingEntry { key } => Some(key),
            Self::WrongType { key, .. } => key.as_deref(),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_every_kind() {
        let missing = ConfigError::MissingEntry {
            key: "strings.paths".into(),
        };
        assert_eq!(missing.to_string(), "Missing entry for key strings.paths.");

        let wrong_type = ConfigError::wrong_type(Some("output"), "String", "Integer");
        assert_eq!(
            wrong_type.to_string(),
            "Wrong type for key output: expected String, got Integer."
        );

        let root = ConfigError::wrong_type(None::<String>, "Dictionary", "Array");
        assert_eq!(
            root.to_string(),
            "Wrong type for key root: expected Dictionary, got Array."
        );

        let not_found = ConfigError::PathNotFound {
            path: PathBuf::from("swiftgen.yml"),
        };
        assert_eq!(not_found.to_string(), "File swiftgen.yml not found.");
    }

    #[test]
    fn prefixes_missing_entry_keys() {
        let error = ConfigError::MissingEntry {
            key: "paths".into(),
        }
        .with_key_prefixed("strings");

        assert_eq!(error.key(), Some("strings.paths"));
    }

    #[test]
    fn prefixing_a_root_wrong_type_yields_just_the_prefix() {
        let error = ConfigError::wrong_type(None::<String>, "Dictionary or Array", "String")
            .with_key_prefixed("fonts");

        assert_eq!(error.key(), Some("fonts"));
    }

    #[test]
    fn prefixing_composes_outwards() {
        let error = ConfigError::wrong_type(Some("output"), "String", "Integer")
            .with_key_prefixed("cmd1")
            .with_key_prefixed("root");

        assert_eq!(error.key(), Some("root.cmd1.output"));
        assert!(matches!(
            error,
            ConfigError::WrongType { ref expected, ref actual, .. }
                if expected == "String" && actual == "Integer"
        ));
    }

    #[test]
    fn path_not_found_ignores_prefixes() {
        let error = ConfigError::PathNotFound {
            path: PathBuf::from("missing.yml"),
        }
        .with_key_prefixed("strings");

        assert!(matches!(error, ConfigError::PathNotFound { .. }));
        assert_eq!(error.key(), None);
    }
}
