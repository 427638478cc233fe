mod execute;
mod outcome;
mod verify;

pub use execute::{execute_relocation, RelocateError};
pub use outcome::{MoveFailure, MoveOutcome, RelocationSummary, RunStatus};
pub use verify::scan_remaining_files;
