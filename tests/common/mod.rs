use docmove::manifest::FileManifest;
use std::path::Path;
use tempfile::TempDir;

/// Create a scratch project directory, cleaned up on drop
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file with the given content under the project root
pub async fn seed_file(project_path: &Path, name: &str, content: &str) {
    tokio::fs::write(project_path.join(name), content)
        .await
        .expect("Failed to seed file");
}

/// Build a manifest from document and script file name lists
pub fn manifest_of(documents: &[&str], scripts: &[&str]) -> FileManifest {
    FileManifest {
        documents: documents.iter().map(|s| s.to_string()).collect(),
        scripts: scripts.iter().map(|s| s.to_string()).collect(),
    }
}
