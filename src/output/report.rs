//! Diagnostic report formatting for `--check`

use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::resolve::{EntryStatus, ResolveReport, SourceStatus};

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "Config file")]
    path: String,
    #[tabled(rename = "Role")]
    description: &'static str,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Accepted")]
    accepted: usize,
}

/// Format a resolve report as human-readable text
pub fn format_report(report: &ResolveReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", "Profile Directory Check".bold()));

    let rows: Vec<SourceRow> = report
        .sources
        .iter()
        .map(|source| SourceRow {
            path: source.path.display().to_string(),
            description: source.description,
            status: match &source.status {
                SourceStatus::Missing => "not present".to_string(),
                SourceStatus::Loaded => "loaded".to_string(),
                SourceStatus::Failed(_) => "unreadable".to_string(),
            },
            accepted: source.accepted().count(),
        })
        .collect();
    output.push_str(&Table::new(rows).to_string());
    output.push('\n');

    for source in &report.sources {
        match &source.status {
            SourceStatus::Missing => continue,
            SourceStatus::Loaded => {
                output.push_str(&format!("\n{}\n", source.path.display().cyan()));
            }
            SourceStatus::Failed(error) => {
                output.push_str(&format!(
                    "\n{} {}\n  {} {}\n",
                    source.path.display().cyan(),
                    "(unreadable)".red(),
                    "X".red(),
                    error
                ));
            }
        }
        output.push_str(&format!("{}\n", "─".repeat(40).dimmed()));

        if source.entries.is_empty() {
            output.push_str(&format!("  {}\n", "(no entries)".dimmed()));
        }

        for entry in &source.entries {
            let status = match entry.status {
                EntryStatus::Accepted => "OK".green().to_string(),
                EntryStatus::Missing => "MISSING".red().to_string(),
                EntryStatus::NotADirectory => "NOT A DIRECTORY".yellow().to_string(),
                EntryStatus::Inaccessible => "INACCESSIBLE".yellow().to_string(),
            };
            output.push_str(&format!(
                "  {:3}: {} [{}]\n",
                entry.line_number,
                entry.path.display(),
                status
            ));
        }
    }

    let directories = report.directories();
    output.push_str(&format!("\n{}\n", "─".repeat(40).dimmed()));
    output.push_str(&format!(
        "{} {} profile director{} resolved (check: {})\n",
        if directories.is_empty() {
            "X".red().to_string()
        } else {
            "OK".green().to_string()
        },
        directories.len(),
        if directories.len() == 1 { "y" } else { "ies" },
        report.check
    ));

    let issues = report.issue_count();
    if issues > 0 {
        output.push_str(&format!("{} {} issue(s) found.\n", "!".yellow(), issues));
    }

    output
}

/// Format a resolve report as JSON
pub fn format_report_json(report: &ResolveReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
