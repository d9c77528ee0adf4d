//! Loading configuration files from disk.

use std::{fs, path::PathBuf};

use swiftgen_config::{
    configuration::{DynamicMapping, DynamicValue},
    Config,
    ConfigError,
    Entry,
    LogLevel,
    TemplateRef,
};
use tempfile::TempDir;

fn write_config(directory: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = directory.path().join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_yaml_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "swiftgen.yml",
        r#"
input_dir: Resources
output_dir: Generated
strings:
  paths: Base.lproj/Localizable.strings
  templateName: structured-swift4
  params:
    enumName: L10n
  output: Strings.swift
xcassets:
  - paths: [Images.xcassets, Colors.xcassets]
    templatePath: Templates/assets.stencil
    output: Assets.swift
  - paths: Other.xcassets
    templateName: swift4
    output: Other.swift
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.file_path, dunce::canonicalize(&path).unwrap());
    assert_eq!(config.input_dir, Some(PathBuf::from("Resources")));
    assert_eq!(config.output_dir, Some(PathBuf::from("Generated")));
    assert_eq!(config.entry_count(), 3);

    let strings = &config.commands["strings"];
    assert_eq!(strings.len(), 1);
    assert_eq!(
        strings[0].template,
        TemplateRef::Name("structured-swift4".into())
    );
    assert_eq!(
        strings[0].command_line("strings"),
        "swiftgen strings -t structured-swift4 --param enumName=L10n -o Strings.swift Base.lproj/Localizable.strings"
    );

    let xcassets = &config.commands["xcassets"];
    assert_eq!(xcassets.len(), 2);
    assert_eq!(
        xcassets[0].paths,
        vec![PathBuf::from("Images.xcassets"), PathBuf::from("Colors.xcassets")]
    );
    assert_eq!(
        xcassets[0].template,
        TemplateRef::Path(PathBuf::from("Templates/assets.stencil"))
    );
}

#[test]
fn loads_the_documented_minimal_example() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "swiftgen.yml",
        "output_dir: /out\ncmd1:\n  paths: src\n  output: out.swift\n",
    );

    let config = Config::load_with_commands(&path, &["cmd1"]).unwrap();

    assert_eq!(
        config.commands["cmd1"],
        vec![Entry {
            paths: vec![PathBuf::from("src")],
            template: TemplateRef::Name(String::new()),
            parameters: DynamicMapping::new(),
            output: PathBuf::from("out.swift"),
        }]
    );
}

#[test]
fn loads_a_toml_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "swiftgen.toml",
        r#"
input_dir = "Resources"

[fonts]
paths = ["Fonts"]
templateName = "swift4"
output = "Fonts.swift"

[fonts.params]
publicAccess = true
"#,
    );

    let config = Config::load(&path).unwrap();

    let fonts = &config.commands["fonts"];
    assert_eq!(fonts[0].parameters["publicAccess"], DynamicValue::Bool(true));
    assert_eq!(
        fonts[0].command_line("fonts"),
        "swiftgen fonts -t swift4 --param publicAccess -o Fonts.swift Fonts"
    );
}

#[test]
fn missing_file_is_reported_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.yml");

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, ConfigError::PathNotFound { path: ref missing } if *missing == path));
    assert_eq!(
        error.to_string(),
        format!("File {} not found.", path.display())
    );
}

#[test]
fn unparsable_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "swiftgen.yml", "strings: [unclosed\n");

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn non_mapping_root_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "swiftgen.yml", "- strings\n- fonts\n");

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(
        error,
        ConfigError::WrongType { key: None, ref expected, .. } if expected == "Dictionary"
    ));
}

#[test]
fn missing_keys_are_prefixed_with_the_command() {
    let temp_dir = TempDir::new().unwrap();

    let path = write_config(&temp_dir, "no-paths.yml", "strings:\n  output: out.swift\n");
    let error = Config::load(&path).unwrap_err();
    assert_eq!(error.to_string(), "Missing entry for key strings.paths.");

    let path = write_config(&temp_dir, "no-output.yml", "fonts:\n  paths: Fonts\n");
    let error = Config::load(&path).unwrap_err();
    assert_eq!(error.to_string(), "Missing entry for key fonts.output.");
}

#[test]
fn wrong_types_are_prefixed_with_the_command() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "swiftgen.yml",
        "colors:\n  paths: Colors.txt\n  params: [a, b]\n  output: Colors.swift\n",
    );

    let error = Config::load(&path).unwrap_err();

    assert_eq!(
        error.to_string(),
        "Wrong type for key colors.params: expected Dictionary, got Array."
    );
}

#[test]
fn lint_walks_a_loaded_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "swiftgen.yml",
        "output_dir: /generated\nplist:\n  paths: Info.plist\n  templateName: runtime-swift4\n  output: Plist.swift\n",
    );
    let config = Config::load(&path).unwrap();

    let mut messages = Vec::new();
    config.lint(|level, message| messages.push((level, message.to_string())));

    assert_eq!(
        messages,
        vec![
            (
                LogLevel::Info,
                "> Common parent directory used for all input paths:  <none>".to_string()
            ),
            (
                LogLevel::Info,
                "> Common parent directory used for all output paths: /generated".to_string()
            ),
            (LogLevel::Info, "> 1 entry for command plist:".to_string()),
            (
                LogLevel::Warning,
                "plist.output: /generated/Plist.swift is an absolute path.".to_string()
            ),
            (
                LogLevel::Info,
                "  $ swiftgen plist -t runtime-swift4 -o Plist.swift Info.plist".to_string()
            ),
        ]
    );
}
