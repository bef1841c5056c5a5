mod list;
mod report;

pub use list::{format_directories, format_directories_json};
pub use report::{format_report, format_report_json};
