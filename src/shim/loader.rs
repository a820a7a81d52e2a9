//! Native library loading and entry-point invocation
//!
//! Opens the payload library with libloading, resolves its entry symbol,
//! and calls it once. The payload is an opaque collaborator: nothing about
//! its behavior is assumed beyond the symbol name and signature.

use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use tracing::debug;

use crate::shim::error::ShimError;

/// Fixed file name of the payload library, with no platform-specific
/// extension substitution
pub const LIBRARY_FILE: &str = "sync.so";

/// Name of the entry symbol resolved inside the payload
pub const ENTRY_SYMBOL: &str = "main";

/// Entry point signature: no arguments, any return value is ignored
type EntryFn = unsafe extern "C" fn();

/// Build the candidate library path: exactly `<dir>/sync.so`
pub fn library_path(dir: &Path) -> PathBuf {
    dir.join(LIBRARY_FILE)
}

/// Load the library from `dir` and invoke its entry point once
///
/// The library handle is dropped when this function returns, so repeated
/// calls perform independent load/invoke cycles. Loading may run the
/// library's own initialization code as a side effect.
pub fn invoke(dir: &Path) -> Result<(), ShimError> {
    let path = library_path(dir);

    // Distinguish a missing file from a load failure up front; dlopen
    // reports both the same way.
    if !path.exists() {
        return Err(ShimError::LibraryNotFound(path));
    }

    debug!("loading library: {}", path.display());
    let library = unsafe {
        Library::new(&path).map_err(|source| ShimError::LoadFailed {
            path: path.clone(),
            source,
        })?
    };

    let entry: Symbol<EntryFn> = unsafe {
        library
            .get(ENTRY_SYMBOL.as_bytes())
            .map_err(|source| ShimError::SymbolNotFound {
                symbol: ENTRY_SYMBOL,
                source,
            })?
    };

    debug!("invoking entry symbol `{}`", ENTRY_SYMBOL);
    unsafe { entry() };

    Ok(())
}
