//! Operator-facing rendering of a relocation run.
//!
//! Per-file progress is emitted live by the engine as each file is
//! processed; this module only renders the closing summary block, the
//! verification block and the overall status line.

use crate::relocate::{RelocationSummary, RunStatus};

/// Print the summary block, the verification block and the overall status
pub fn print_summary(summary: &RelocationSummary) {
    println!();
    println!("Relocation summary");
    println!("------------------");
    println!("Moved:     {}", summary.moved_count);
    println!("Not found: {}", summary.not_found_count);
    println!("Errors:    {}", summary.errors.len());

    if !summary.errors.is_empty() {
        println!();
        println!("Failed moves:");
        for failure in &summary.errors {
            println!(
                "  {} ({}): {}",
                failure.file_name, failure.category, failure.message
            );
        }
    }

    println!();
    if summary.remaining_files.is_empty() {
        println!("Verification: no tracked files left at the project root.");
    } else {
        println!("Verification: tracked files still at the project root:");
        for name in &summary.remaining_files {
            println!("  {name}");
        }
    }

    println!();
    println!("Status: {}", status_label(summary.status()));
}

/// Human-readable label for the run classification
pub fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Success => "success",
        RunStatus::Partial => "partial: some files missing",
        RunStatus::Errors => "errors occurred",
    }
}
