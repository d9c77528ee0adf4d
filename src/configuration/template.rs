use std::path::PathBuf;

use tracing::warn;


/// Which template an entry renders with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TemplateRef {
    /// A template bundled with the generator, referenced by its short name.
    Name(String),

    /// A template file on disk.
    Path(PathBuf),
}

impl TemplateRef {
    /// Picks a variant from the two optional template keys of an entry.
    ///
    /// A non-empty name always wins. Without one, a path selects [`TemplateRef::Path`];
    /// with neither, the result is the empty-name sentinel `Name("")`.
    pub fn new(name: Option<String>, path: Option<PathBuf>) -> Self {
        let name = name.unwrap_or_default();

        match path {
            Some(path) if name.is_empty() => Self::Path(path),
            Some(path) => {
                warn!(
                    "Both templateName ({}) and templatePath ({}) were given, using templateName.",
                    name,
                    path.display()
                );
                Self::Name(name)
            }
            None => Self::Name(name),
        }
    }

    /// The command-line flag selecting this template.
    pub fn flag(&self) -> String {
        match self {
            Self::Name(name) => format!("-t {name}"),
            Self::Path(path) => format!("-p {}", path.display()),
        }
    }
}
