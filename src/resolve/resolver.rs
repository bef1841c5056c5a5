//! Walks the configuration files and validates the directories they list

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigFile, EntryCheck, default_config_files};
use crate::error::ResolveError;
use crate::parser::{ListEntry, ListReader};
use crate::resolve::report::{
    EntryReport, EntryStatus, ResolveReport, SourceReport, SourceStatus,
};

/// Resolves profile directories from an ordered list of configuration files
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    files: Vec<ConfigFile>,
    check: EntryCheck,
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new(default_config_files())
    }
}

impl ProfileResolver {
    /// Files are consulted in the given order, lowest priority first
    pub fn new(files: impl IntoIterator<Item = ConfigFile>) -> Self {
        Self {
            files: files.into_iter().collect(),
            check: EntryCheck::default(),
        }
    }

    pub fn with_check(mut self, check: EntryCheck) -> Self {
        self.check = check;
        self
    }

    pub fn files(&self) -> &[ConfigFile] {
        &self.files
    }

    pub fn check(&self) -> EntryCheck {
        self.check
    }

    /// Collect every valid profile directory, in file order then line order.
    ///
    /// Stops at the first configuration file that exists but cannot be read;
    /// the directories gathered up to that point travel inside the error.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ResolveError> {
        let mut dirs = Vec::new();

        for config_file in &self.files {
            let result = self.scan_file(config_file, |entry, status| {
                if status == EntryStatus::Accepted {
                    dirs.push(entry.path);
                }
            });

            if let Err(source) = result {
                return Err(ResolveError::Io {
                    path: config_file.path.clone(),
                    source,
                    partial: dirs,
                });
            }
        }

        if dirs.is_empty() {
            return Err(ResolveError::NoProfileDirectories);
        }

        Ok(dirs)
    }

    /// Walk every configuration file and record what happened to each line.
    ///
    /// Unlike `resolve`, an unreadable file is recorded and the walk goes on.
    pub fn inspect(&self) -> ResolveReport {
        let sources = self
            .files
            .iter()
            .map(|config_file| {
                let mut entries = Vec::new();
                let result = self.scan_file(config_file, |entry, status| {
                    entries.push(EntryReport {
                        line_number: entry.line_number,
                        path: entry.path,
                        status,
                    });
                });

                let status = match result {
                    Ok(true) => SourceStatus::Loaded,
                    Ok(false) => SourceStatus::Missing,
                    Err(e) => SourceStatus::Failed(e.to_string()),
                };

                SourceReport {
                    path: config_file.path.clone(),
                    description: config_file.description,
                    status,
                    entries,
                }
            })
            .collect();

        ResolveReport {
            check: self.check,
            sources,
        }
    }

    /// Feed each non-empty line of `config_file` to `on_entry`.
    ///
    /// Returns `Ok(false)` when the file does not exist.
    fn scan_file<F>(&self, config_file: &ConfigFile, mut on_entry: F) -> io::Result<bool>
    where
        F: FnMut(ListEntry, EntryStatus),
    {
        let Some(reader) = open_if_present(&config_file.path)? else {
            debug!(
                path = %config_file.path.display(),
                description = config_file.description,
                "config file not present, skipping"
            );
            return Ok(false);
        };

        debug!(path = %config_file.path.display(), "reading config file");

        for entry in reader {
            let entry = entry?;
            let status = self.validate(&entry.path);
            if status != EntryStatus::Accepted {
                debug!(
                    file = %config_file.path.display(),
                    line = entry.line_number,
                    entry = %entry.path.display(),
                    %status,
                    "dropping profile directory"
                );
            }
            on_entry(entry, status);
        }

        Ok(true)
    }

    fn validate(&self, path: &Path) -> EntryStatus {
        match (fs::metadata(path), self.check) {
            (Err(e), _) if is_absent(&e) => EntryStatus::Missing,
            // Present but not stat-able (e.g. permissions): counts as existing
            (Err(_), EntryCheck::Exists) => EntryStatus::Accepted,
            (Err(_), EntryCheck::Directory) => EntryStatus::Inaccessible,
            (Ok(_), EntryCheck::Exists) => EntryStatus::Accepted,
            (Ok(meta), EntryCheck::Directory) if meta.is_dir() => EntryStatus::Accepted,
            (Ok(_), EntryCheck::Directory) => EntryStatus::NotADirectory,
        }
    }
}

/// Open `path` unless it does not exist.
///
/// Any metadata failure other than absence falls through to the open so the
/// caller sees the real error.
fn open_if_present(path: &Path) -> io::Result<Option<ListReader<BufReader<File>>>> {
    match fs::metadata(path) {
        Err(e) if is_absent(&e) => Ok(None),
        _ => ListReader::open(path).map(Some),
    }
}

/// A missing component, or a component that is a file where a directory
/// was expected (ENOTDIR), both mean nothing exists at the path.
fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Resolve profile directories from the default configuration files
pub fn resolve_profile_dirs() -> Result<Vec<PathBuf>, ResolveError> {
    ProfileResolver::default().resolve()
}
