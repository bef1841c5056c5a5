use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ConfigFile, EntryCheck, default_config_files};
use crate::resolve::ProfileResolver;

#[derive(Parser, Debug)]
#[command(name = "aa-lsm-hook-paths")]
#[command(
    author,
    version,
    about = "Resolve the profile directories configured for the AppArmor LSM hook"
)]
#[command(
    long_about = "Reads /usr/share/defaults/etc/aa-lsm-hook.conf and then \
    /etc/aa-lsm-hook.conf, each listing one profile directory per line, and \
    prints the directories that exist in priority order."
)]
pub struct Args {
    /// Configuration file to read instead of the defaults (repeatable, lowest priority first)
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Only accept entries that are directories, not just existing paths
    #[arg(short = 'd', long)]
    pub require_dir: bool,

    /// Print a per-file, per-entry diagnostic report
    #[arg(long)]
    pub check: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        // Reading the same file twice would silently duplicate its entries
        for (i, path) in self.config.iter().enumerate() {
            if self.config[..i].contains(path) {
                return Err(format!("--config {} given more than once", path.display()));
            }
        }

        Ok(())
    }

    /// Configuration files selected on the command line, or the defaults
    pub fn config_files(&self) -> Vec<ConfigFile> {
        if self.config.is_empty() {
            default_config_files()
        } else {
            self.config.iter().cloned().map(ConfigFile::user).collect()
        }
    }

    pub fn entry_check(&self) -> EntryCheck {
        if self.require_dir {
            EntryCheck::Directory
        } else {
            EntryCheck::Exists
        }
    }

    pub fn resolver(&self) -> ProfileResolver {
        ProfileResolver::new(self.config_files()).with_check(self.entry_check())
    }
}
