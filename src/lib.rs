pub mod interrupt;
pub mod manifest;
pub mod relocate;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use interrupt::Interrupt;
pub use manifest::{default_manifest, Category, FileManifest};
pub use relocate::{
    execute_relocation, scan_remaining_files, MoveFailure, MoveOutcome, RelocateError,
    RelocationSummary, RunStatus,
};
pub use report::{print_summary, status_label};
