use std::path::PathBuf;

use serde::Serialize;

/// Configuration files consulted by default, in ascending priority order
pub const DEFAULT_CONFIG_FILES: [&str; 2] = [
    "/usr/share/defaults/etc/aa-lsm-hook.conf",
    "/etc/aa-lsm-hook.conf",
];

/// A configuration file that lists profile directories, one per line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub description: &'static str,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, description: &'static str) -> Self {
        Self {
            path: path.into(),
            description,
        }
    }

    /// Vendor defaults shipped by the distribution
    pub fn vendor(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "vendor defaults")
    }

    /// Local administrator configuration
    pub fn system(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "system configuration")
    }

    /// A file named explicitly by the caller
    pub fn user(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "user supplied")
    }
}

/// The built-in configuration file list
pub fn default_config_files() -> Vec<ConfigFile> {
    let [vendor, system] = DEFAULT_CONFIG_FILES;
    vec![ConfigFile::vendor(vendor), ConfigFile::system(system)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_vendor_then_system() {
        let files = default_config_files();
        assert_eq!(files.len(), 2);
        assert_eq!(
            files[0].path,
            PathBuf::from("/usr/share/defaults/etc/aa-lsm-hook.conf")
        );
        assert_eq!(files[1].path, PathBuf::from("/etc/aa-lsm-hook.conf"));
    }

    #[test]
    fn test_user_file_description() {
        let file = ConfigFile::user("/tmp/custom.conf");
        assert_eq!(file.description, "user supplied");
        assert_eq!(file.path, PathBuf::from("/tmp/custom.conf"));
    }
}
