use std::path::{Path, PathBuf};

/// Name of the folder documentation files are moved into
pub const DOCS_DIR: &str = "docs";

/// File suffixes the verification scan considers relevant
pub const TRACKED_EXTENSIONS: [&str; 2] = [".md", ".sql"];

/// Files that are expected to stay at the project root
pub const ALLOW_LIST: [&str; 2] = ["README.md", "Attributions.md"];

/// Get the path to the docs folder
pub fn get_docs_path(project_path: &Path) -> PathBuf {
    project_path.join(DOCS_DIR)
}

/// Check whether a file name carries a tracked extension
pub fn has_tracked_extension(name: &str) -> bool {
    TRACKED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Check whether a file name is excluded from the verification report
pub fn is_allow_listed(name: &str) -> bool {
    ALLOW_LIST.contains(&name)
}
