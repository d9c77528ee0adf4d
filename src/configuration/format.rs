use std::path::Path;

use super::value::DynamicValue;


/// Text formats a configuration document may be written in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are read as TOML, everything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    /// Parses `contents` into an untyped document tree.
    pub fn parse(self, contents: &str) -> Result<DynamicValue, String> {
        match self {
            // An empty YAML stream is a valid, empty document.
            Self::Yaml if contents.trim().is_empty() => Ok(DynamicValue::Null),
            Self::Yaml => serde_yaml_ng::from_str(contents).map_err(|error| error.to_string()),
            Self::Toml => toml::from_str(contents).map_err(|error| error.to_string()),
        }
    }
}
