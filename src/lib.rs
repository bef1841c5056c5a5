pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod resolve;

pub use config::{ConfigFile, DEFAULT_CONFIG_FILES, EntryCheck};
pub use error::ResolveError;
pub use resolve::{ProfileResolver, resolve_profile_dirs};
