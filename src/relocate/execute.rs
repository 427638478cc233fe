use super::outcome::{MoveFailure, MoveOutcome, RelocationSummary};
use super::verify::scan_remaining_files;
use crate::interrupt::Interrupt;
use crate::manifest::FileManifest;
use crate::utils::get_docs_path;
use std::io;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Run interrupted")]
    Interrupted,
}

/// Move every manifest entry from `project_path` into its docs/ subfolder.
///
/// The docs folder is created first; a failure there aborts the whole run.
/// Entries are then processed strictly in declared order, one at a time.
/// Per-file failures are recorded in the summary and do not stop the
/// remaining entries. An occupied destination is rejected, never
/// overwritten. The interrupt flag is consulted between file operations;
/// a raised flag stops the run where it is, with no rollback.
pub async fn execute_relocation(
    manifest: &FileManifest,
    project_path: &Path,
    interrupt: &Interrupt,
) -> Result<RelocationSummary, RelocateError> {
    let docs_path = get_docs_path(project_path);

    fs::create_dir_all(&docs_path).await?;

    let mut summary = RelocationSummary::default();

    for (category, name) in manifest.entries() {
        if interrupt.is_raised() {
            warn!("stopping before remaining files, nothing is rolled back");
            return Err(RelocateError::Interrupted);
        }

        match move_file(project_path, &docs_path, name).await {
            MoveOutcome::Moved => {
                info!(category = %category, file = name, "moved");
                summary.moved_count += 1;
            }
            MoveOutcome::NotFound => {
                info!(category = %category, file = name, "not found, skipping");
                summary.not_found_count += 1;
            }
            MoveOutcome::Error(message) => {
                error!(category = %category, file = name, %message, "move failed");
                summary.errors.push(MoveFailure {
                    file_name: name.to_string(),
                    category,
                    message,
                });
            }
        }
    }

    summary.remaining_files = scan_remaining_files(project_path).await;

    Ok(summary)
}

/// Attempt one move and classify the result.
///
/// The rename itself is the authority on whether the source still exists:
/// a rename failing with NotFound is the not-found signal, so there is no
/// separate existence check racing with external deletion. The destination
/// is probed first only to enforce the reject policy, since a plain rename
/// would silently replace an existing file.
async fn move_file(project_path: &Path, docs_path: &Path, name: &str) -> MoveOutcome {
    let source = project_path.join(name);
    let destination = docs_path.join(name);

    let dest_occupied = match fs::try_exists(&destination).await {
        Ok(occupied) => occupied,
        Err(err) => return MoveOutcome::Error(err.to_string()),
    };

    if dest_occupied {
        // An entry that was already relocated (e.g. a duplicate manifest
        // line, or a rerun) leaves nothing at the source; that is not a
        // collision.
        return match fs::try_exists(&source).await {
            Ok(false) => MoveOutcome::NotFound,
            Ok(true) => MoveOutcome::Error(format!(
                "destination already exists: {}",
                destination.display()
            )),
            Err(err) => MoveOutcome::Error(err.to_string()),
        };
    }

    match fs::rename(&source, &destination).await {
        Ok(()) => MoveOutcome::Moved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => MoveOutcome::NotFound,
        Err(err) => MoveOutcome::Error(err.to_string()),
    }
}
