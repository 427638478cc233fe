//! Interrupt handling for the relocation run.
//!
//! A raised interrupt stops the run between file operations: files already
//! moved stay moved, nothing is rolled back. The signal listener flips a
//! watch flag; the engine polls the flag before each file operation.

use tokio::sync::watch;
use tracing::warn;

/// Handle to the process interrupt flag
#[derive(Debug, Clone)]
pub struct Interrupt {
    flag: watch::Receiver<bool>,
}

impl Interrupt {
    /// Install the Ctrl-C listener and return the checkable handle
    pub fn install() -> Self {
        let (tx, rx) = watch::channel(false);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt signal received");
                let _ = tx.send(true);
            }
        });

        Self { flag: rx }
    }

    /// A handle with a caller-controlled trigger, for embedding the engine
    /// without a signal listener
    pub fn manual() -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, Self { flag: rx })
    }

    /// A handle that never raises
    pub fn none() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { flag: rx }
    }

    /// Non-blocking check, consulted between file operations
    pub fn is_raised(&self) -> bool {
        *self.flag.borrow()
    }
}
