//! sync-shim - loader shim for an external native sync library
//!
//! Loads a shared library named `sync.so` from a directory, resolves its
//! no-argument `main` entry point, and invokes it once per call. The
//! payload is treated as an opaque external collaborator; every failure is
//! caught at the outer layer and reduced to a single diagnostic line, so
//! callers never observe an error.
//!
//! ## Design
//!
//! The internal load-and-call path ([`shim::invoke`]) returns a typed
//! [`ShimError`] so failures stay distinguishable and testable. Only the
//! outermost wrapper ([`shim::sync`]) applies the fire-and-forget policy of
//! logging and discarding.

pub mod shim;
pub mod utils;

pub use shim::{sync, ShimError};
