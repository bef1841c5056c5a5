mod report;
mod resolver;

pub use report::{EntryReport, EntryStatus, ResolveReport, SourceReport, SourceStatus};
pub use resolver::{ProfileResolver, resolve_profile_dirs};
