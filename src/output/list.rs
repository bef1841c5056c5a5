use std::path::PathBuf;

/// One directory per line, as consumed by scripts
pub fn format_directories(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|dir| format!("{}\n", dir.display()))
        .collect()
}

/// Format resolved directories as a JSON array
pub fn format_directories_json(dirs: &[PathBuf]) -> String {
    serde_json::to_string_pretty(dirs).unwrap_or_else(|_| "[]".to_string())
}
