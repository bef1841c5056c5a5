mod files;

pub use files::{ConfigFile, DEFAULT_CONFIG_FILES, default_config_files};

use serde::Serialize;

/// How a listed profile directory is validated before it is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryCheck {
    /// Any existing filesystem entry is accepted
    #[default]
    Exists,
    /// The entry must exist and be a directory
    Directory,
}

impl std::fmt::Display for EntryCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryCheck::Exists => write!(f, "exists"),
            EntryCheck::Directory => write!(f, "directory"),
        }
    }
}
