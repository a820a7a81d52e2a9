//! Loader shim for the external `sync.so` payload
//!
//! Locates a shared library named `sync.so` inside a directory, loads it,
//! resolves its no-argument `main` entry point, and invokes it. The outer
//! [`sync`] wrapper is fire-and-forget: every failure is reduced to a fixed
//! line on stdout and the caller observes nothing.

pub mod error;
pub mod loader;

pub use error::ShimError;
pub use loader::{invoke, library_path, ENTRY_SYMBOL, LIBRARY_FILE};

use std::path::Path;

use tracing::warn;

/// Fixed diagnostic printed when any stage of the load-and-call fails
pub const FAILURE_MESSAGE: &str = "error executing Go command";

/// Load `sync.so` from `dir` and run its entry point, swallowing failure
///
/// Never panics and never propagates an error. The typed cause goes to the
/// log; stdout carries only the fixed diagnostic line. Calling this twice
/// with a valid library performs two independent invocations.
pub fn sync(dir: &Path) {
    if let Err(e) = invoke(dir) {
        warn!("sync failed: {}", e);
        println!("{}", FAILURE_MESSAGE);
    }
}
