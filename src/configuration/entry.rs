use std::path::{Path, PathBuf};

use super::{
    error::ConfigError,
    template::TemplateRef,
    traits::ResolvableConfiguration,
    utilities::rebase_path,
    value::{DynamicMapping, DynamicValue, FromDynamicValue},
};


/// Keys recognised inside a single entry.
pub mod keys {
    pub const PATHS: &str = "paths";
    pub const TEMPLATE_NAME: &str = "templateName";
    pub const TEMPLATE_PATH: &str = "templatePath";
    pub const PARAMS: &str = "params";
    pub const OUTPUT: &str = "output";
}


/// An entry mapping as found in the document, before any validation.
pub(super) struct UnresolvedEntry<'a> {
    fields: &'a DynamicMapping,
}

impl<'a> UnresolvedEntry<'a> {
    pub(super) fn new(fields: &'a DynamicMapping) -> Self {
        Self { fields }
    }

    /// Fetches an optional field, failing only if it is present with the wrong shape.
    fn optional_field<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromDynamicValue,
    {
        let Some(value) = self.fields.get(key) else {
            return Ok(None);
        };

        T::from_dynamic(value)
            .map(Some)
            .ok_or_else(|| ConfigError::wrong_type(Some(key), T::TYPE_NAME, value.type_name()))
    }

    fn paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let value = self
            .fields
            .get(keys::PATHS)
            .ok_or_else(|| ConfigError::MissingEntry {
                key: keys::PATHS.to_string(),
            })?;

        if let Some(path) = value.as_str() {
            return Ok(vec![PathBuf::from(path)]);
        }

        let paths = Vec::<String>::from_dynamic(value).ok_or_else(|| {
            ConfigError::wrong_type(
                Some(keys::PATHS),
                "Path or array of Paths",
                value.type_name(),
            )
        })?;

        Ok(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl ResolvableConfiguration for UnresolvedEntry<'_> {
    type Resolved = Entry;

    fn resolve(self) -> Result<Self::Resolved, ConfigError> {
        let paths = self.paths()?;

        let template_name = self.optional_field::<String>(keys::TEMPLATE_NAME)?;
        let template_path = self
            .optional_field::<String>(keys::TEMPLATE_PATH)?
            .map(PathBuf::from);
        let template = TemplateRef::new(template_name, template_path);

        let parameters = self
            .optional_field::<DynamicMapping>(keys::PARAMS)?
            .unwrap_or_default();

        let output = self
            .optional_field::<String>(keys::OUTPUT)?
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEntry {
                key: keys::OUTPUT.to_string(),
            })?;


        Ok(Entry {
            paths,
            template,
            parameters,
            output,
        })
    }
}


/// One generation unit: input paths, a template, parameters and an output file.
#[derive(Clone, PartialEq, Debug)]
pub struct Entry {
    pub paths: Vec<PathBuf>,

    pub template: TemplateRef,

    /// Free-form template parameters.
    pub parameters: DynamicMapping,

    pub output: PathBuf,
}

impl Entry {
    /// Validate a single entry mapping.
    pub fn from_mapping(fields: &DynamicMapping) -> Result<Self, ConfigError> {
        UnresolvedEntry::new(fields).resolve()
    }

    /// Parse the value of a command key, which holds either one entry mapping
    /// or a list of them.
    pub fn parse_command_entry(value: &DynamicValue) -> Result<Vec<Self>, ConfigError> {
        let not_an_entry =
            || ConfigError::wrong_type(None::<String>, "Dictionary or Array", value.type_name());

        match value {
            DynamicValue::Mapping(fields) => Ok(vec![Self::from_mapping(fields)?]),
            DynamicValue::List(items) => {
                let mappings = items
                    .iter()
                    .map(DynamicValue::as_mapping)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(not_an_entry)?;

                mappings.into_iter().map(Self::from_mapping).collect()
            }
            _ => Err(not_an_entry()),
        }
    }

    /// Returns a copy of this entry with relative input paths moved under `input_directory`
    /// and a relative output moved under `output_directory`.
    #[must_use = "function returns the rebased entry"]
    pub fn rebased(
        &self,
        input_directory: Option<&Path>,
        output_directory: Option<&Path>,
    ) -> Self {
        Self {
            paths: self
                .paths
                .iter()
                .map(|path| rebase_path(path, input_directory))
                .collect(),
            template: self.template.clone(),
            parameters: self.parameters.clone(),
            output: rebase_path(&self.output, output_directory),
        }
    }
}
