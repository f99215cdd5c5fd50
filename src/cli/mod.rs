pub mod commands;
pub mod output;
pub mod parser;

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Full argument vector after `rsha1`
    pub raw: Vec<String>,
    /// Subcommand verb, when the first positional names one (e.g. "verify")
    pub verb: Option<String>,
    /// Positional arguments after the verb (file paths, digests)
    pub args: Vec<String>,
    /// Parsed flags (`--flag=value`, `-f`, etc.)
    pub flags: HashMap<String, String>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_flag(&self, key: &str) -> Option<&String> {
        self.flags.get(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }
}
