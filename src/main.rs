use anyhow::Context;
use clap::Parser;
use docmove::interrupt::Interrupt;
use docmove::manifest::default_manifest;
use docmove::relocate::{execute_relocation, RelocateError};
use docmove::report::print_summary;
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Exit code reported when the run is stopped by an interrupt signal
const INTERRUPT_EXIT_CODE: u8 = 130;

/// Docmove - move Minerva documentation and SQL maintenance files into docs/
///
/// Takes no arguments: the file manifest, the target folder and the
/// allow-list are compiled in.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    // No operational flags; parsing still rejects unexpected arguments
    let _args = Args::parse();

    match run().await {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let project_path =
        std::env::current_dir().context("failed to resolve the working directory")?;

    info!(path = %project_path.display(), "relocating documentation files");

    let manifest = default_manifest();
    let interrupt = Interrupt::install();

    match execute_relocation(&manifest, &project_path, &interrupt).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(ExitCode::from(summary.status().exit_code()))
        }
        Err(RelocateError::Interrupted) => {
            warn!("run interrupted before completion");
            Ok(ExitCode::from(INTERRUPT_EXIT_CODE))
        }
        Err(err) => Err(err).context("relocation run failed"),
    }
}
