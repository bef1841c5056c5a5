use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while resolving profile directories
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A configuration file exists but could not be opened or read.
    ///
    /// `partial` holds the directories accepted before the failure. It may be
    /// non-empty but must not be treated as complete.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        partial: Vec<PathBuf>,
    },

    #[error("failed to find any configured profile paths")]
    NoProfileDirectories,
}

impl ResolveError {
    /// Directories collected before the error occurred
    pub fn partial(&self) -> &[PathBuf] {
        match self {
            ResolveError::Io { partial, .. } => partial,
            ResolveError::NoProfileDirectories => &[],
        }
    }

    /// The configuration file that failed, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ResolveError::Io { path, .. } => Some(path),
            ResolveError::NoProfileDirectories => None,
        }
    }
}
