//! Linting of a loaded [`Config`]: reports paths that will not travel well between
//! machines and prints the generator invocation each entry corresponds to.

use std::path::Path;

use crate::configuration::{flatten_parameters, Config, Entry, TemplateRef};

/// Name of the generator binary, as shown in reconstructed command lines.
pub const TOOL_NAME: &str = "swiftgen";


/// Severity of a lint message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Info,
    Warning,
}


fn display_directory(directory: Option<&Path>) -> String {
    directory
        .map(|directory| directory.display().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

impl Entry {
    /// Reconstructs the generator invocation equivalent to this entry.
    pub fn command_line(&self, command: &str) -> String {
        let mut arguments = vec![
            TOOL_NAME.to_string(),
            command.to_string(),
            self.template.flag(),
        ];

        arguments.extend(
            flatten_parameters(&self.parameters)
                .into_iter()
                .map(|parameter| format!("--param {parameter}")),
        );

        arguments.push(format!("-o {}", self.output.display()));
        arguments.extend(self.paths.iter().map(|path| path.display().to_string()));

        arguments.join(" ")
    }
}

impl Config {
    /// Walks every entry and reports through `logger`. Never fails;
    /// problems are reported as [`LogLevel::Warning`] messages.
    pub fn lint<L>(&self, mut logger: L)
    where
        L: FnMut(LogLevel, &str),
    {
        let input_dir = self.input_dir.as_deref();
        let output_dir = self.output_dir.as_deref();

        logger(
            LogLevel::Info,
            &format!(
                "> Common parent directory used for all input paths:  {}",
                display_directory(input_dir)
            ),
        );
        logger(
            LogLevel::Info,
            &format!(
                "> Common parent directory used for all output paths: {}",
                display_directory(output_dir)
            ),
        );

        for (command, entries) in &self.commands {
            let noun = if entries.len() == 1 { "entry" } else { "entries" };
            logger(
                LogLevel::Info,
                &format!("> {} {} for command {}:", entries.len(), noun, command),
            );

            for entry in entries {
                let rebased = entry.rebased(input_dir, output_dir);

                if rebased.paths.is_empty() {
                    logger(
                        LogLevel::Warning,
                        &format!("{command}.paths: no input paths given."),
                    );
                }

                for input_path in rebased.paths.iter().filter(|path| path.is_absolute()) {
                    logger(
                        LogLevel::Warning,
                        &format!(
                            "{command}.paths: {} is an absolute path.",
                            input_path.display()
                        ),
                    );
                }

                if let TemplateRef::Path(template_path) = &rebased.template {
                    if template_path.is_absolute() {
                        logger(
                            LogLevel::Warning,
                            &format!(
                                "{command}.templatePath: {} is an absolute path.",
                                template_path.display()
                            ),
                        );
                    }
                }

                if rebased.output.is_absolute() {
                    logger(
                        LogLevel::Warning,
                        &format!(
                            "{command}.output: {} is an absolute path.",
                            rebased.output.display()
                        ),
                    );
                }

                logger(
                    LogLevel::Info,
                    &format!("  $ {}", entry.command_line(command)),
                );
            }
        }
    }
}
