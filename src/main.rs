//! sync-shim binary entry point
//!
//! Resolves the target directory (defaulting to the process's current
//! working directory) and hands off to the shim. The process always exits
//! 0; failure is reported as a single diagnostic line, never as an exit
//! status.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};

use sync_shim::shim;
use sync_shim::utils::init_logging;

#[derive(Debug, Parser)]
#[command(
    name = "sync-shim",
    version,
    about = "Run the `main` entry point of a sync.so library"
)]
struct Args {
    /// Directory containing sync.so; when omitted, the current working
    /// directory is searched, which is the historical behavior
    dir: Option<PathBuf>,

    /// Log the resolved directory and library path before invoking
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(if args.verbose { Some("debug") } else { None });

    let dir = match args.dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                // Nowhere to look for the library; same observable outcome
                // as any other failure: one line, exit 0.
                warn!("cannot resolve working directory: {}", e);
                println!("{}", shim::FAILURE_MESSAGE);
                return;
            }
        },
    };

    debug!("working directory: {}", dir.display());
    debug!("library path: {}", shim::library_path(&dir).display());

    shim::sync(&dir);
}
