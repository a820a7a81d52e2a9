//! Shim error types
//!
//! Each stage of the load-and-call sequence gets its own variant so tests
//! and logs can tell failures apart. The outer layer collapses all of them
//! into one fixed diagnostic line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the library or resolving its entry point
#[derive(Debug, Error)]
pub enum ShimError {
    /// No file exists at the constructed library path
    #[error("library not found: {}", .0.display())]
    LibraryNotFound(PathBuf),

    /// The file exists but the dynamic loader rejected it
    #[error("failed to load library {}: {source}", .path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The library loaded but does not export the entry symbol
    #[error("entry symbol `{symbol}` not found: {source}")]
    SymbolNotFound {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}
