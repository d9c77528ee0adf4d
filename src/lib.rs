//! Loading and linting of `swiftgen` configuration files.
//!
//! A configuration file (`swiftgen.yml`) lists, per generator command, the entries
//! to generate: input paths, a template, template parameters and an output file.
//! [`Config::load`] validates such a file into typed [`Entry`] values and
//! [`Config::lint`] reports on them.

pub mod configuration;
pub mod lint;
pub mod logging;

pub use configuration::{Config, ConfigError, Entry, TemplateRef};
pub use lint::LogLevel;
