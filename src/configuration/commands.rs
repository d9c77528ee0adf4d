/// Commands the generator ships with, i.e. the top-level keys a configuration
/// file may hold entries under.
///
/// Command entries are collected in this order.
pub const DEFAULT_COMMANDS: &[&str] = &[
    "colors", "coredata", "files", "fonts", "ib", "json", "plist", "strings", "xcassets", "yaml",
];
