//! This module contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Config::load`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated configuration structures.
//!
//! The configuration file is first parsed into an untyped [`DynamicValue`] tree
//! (YAML, or TOML for `.toml` files). That tree is wrapped in an
//! `UnresolvedConfiguration`, whose `resolve` method walks the known commands and
//! turns each command's value into validated [`Entry`] values.
//!
//! Validation is fail-fast: the first problem found is returned as a [`ConfigError`]
//! whose key is prefixed with every enclosing key on the way out (e.g. `strings.output`).

#![allow(rustdoc::private_intra_doc_links)]

mod commands;
mod entry;
mod error;
mod format;
mod parameters;
mod structure;
mod template;
mod traits;
mod utilities;
mod value;

pub use commands::DEFAULT_COMMANDS;
pub use entry::{keys as entry_keys, Entry};
pub use error::ConfigError;
pub use format::DocumentFormat;
pub use parameters::flatten_parameters;
pub use structure::*;
pub use template::TemplateRef;
pub use utilities::{get_default_configuration_file_path, rebase_path, DEFAULT_CONFIGURATION_FILE_NAME};
pub use value::{DynamicMapping, DynamicValue, FromDynamicValue};
