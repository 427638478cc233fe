use crate::utils::{has_tracked_extension, is_allow_listed};
use std::path::Path;
use walkdir::WalkDir;

/// Scan the project root for tracked-extension files that are still in
/// place and not allow-listed.
///
/// The scan is non-recursive: files already under docs/ (or any other
/// subfolder) are out of scope. The result is sorted by name so runs are
/// deterministic. Unreadable entries are skipped.
pub async fn scan_remaining_files(project_path: &Path) -> Vec<String> {
    let mut remaining = Vec::new();

    for entry in WalkDir::new(project_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if has_tracked_extension(&name) && !is_allow_listed(&name) {
            remaining.push(name);
        }
    }

    remaining.sort();
    remaining
}
