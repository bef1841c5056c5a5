use std::path::PathBuf;

use serde::Serialize;

use crate::config::EntryCheck;

/// Outcome of validating one listed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Exists and satisfies the entry check
    Accepted,
    /// Nothing exists at the path
    Missing,
    /// Exists but is not a directory (only with `EntryCheck::Directory`)
    NotADirectory,
    /// Could not be inspected, e.g. permission denied on a parent (only with
    /// `EntryCheck::Directory`)
    Inaccessible,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Accepted => write!(f, "ok"),
            EntryStatus::Missing => write!(f, "missing"),
            EntryStatus::NotADirectory => write!(f, "not a directory"),
            EntryStatus::Inaccessible => write!(f, "inaccessible"),
        }
    }
}

/// A single non-empty line of a configuration file and what became of it
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub line_number: usize,
    pub path: PathBuf,
    pub status: EntryStatus,
}

/// What happened to a configuration file as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "error")]
pub enum SourceStatus {
    /// The file does not exist
    Missing,
    /// The file was read to the end
    Loaded,
    /// The file exists but could not be opened or read
    Failed(String),
}

/// Diagnostics for one configuration file
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub path: PathBuf,
    pub description: &'static str,
    pub status: SourceStatus,
    pub entries: Vec<EntryReport>,
}

impl SourceReport {
    pub fn accepted(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Accepted)
    }
}

/// Full diagnostic walk over every configuration file
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub check: EntryCheck,
    pub sources: Vec<SourceReport>,
}

impl ResolveReport {
    /// Accepted directories in priority order, as `resolve` would return them
    pub fn directories(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .flat_map(SourceReport::accepted)
            .map(|e| e.path.clone())
            .collect()
    }

    /// Number of rejected entries plus unreadable files
    pub fn issue_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| {
                let failed = usize::from(matches!(s.status, SourceStatus::Failed(_)));
                let rejected = s
                    .entries
                    .iter()
                    .filter(|e| e.status != EntryStatus::Accepted)
                    .count();
                failed + rejected
            })
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.sources
            .iter()
            .any(|s| matches!(s.status, SourceStatus::Failed(_)))
    }
}
