use std::path::PathBuf;
use thiserror::Error;

/// A captured failure to list one directory's contents.
///
/// Yielded in place of that directory's children; the traversal then
/// continues with siblings and the rest of the tree. At most one is
/// produced per directory — the listing call is the single failure point,
/// so once a listing succeeds its children cannot independently fail.
#[derive(Error, Debug)]
#[error("Failed to walk path \"{}\"", path.display())]
pub struct WalkError {
    /// Recursion level of the directory whose listing failed. A failed
    /// root reports depth 0; a failed subdirectory whose own entry was
    /// yielded at depth `d` reports depth `d + 1`.
    pub depth: usize,

    /// Absolute path of the directory that failed to list.
    pub path: PathBuf,

    /// The underlying failure, preserved for inspection.
    #[source]
    pub cause: ErrorCause,
}

/// The underlying cause of a [`WalkError`].
///
/// The engine propagates causes without interpreting them. `Other` is
/// opaque by design — custom listers may surface anything, so consumers
/// must not assume a recognizable error shape behind it.
#[derive(Error, Debug)]
pub enum ErrorCause {
    /// A structured OS-level failure (permission denied, not a
    /// directory, vanished path, I/O fault).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other failure surfaced by a custom [`Lister`](crate::Lister).
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A configuration fault in the traversal root.
///
/// Unlike [`WalkError`], this is fatal: it is returned by
/// [`WalkBuilder::start`](crate::WalkBuilder::start) before any element
/// is produced, and nothing is yielded.
#[derive(Error, Debug)]
pub enum InvalidRootError {
    /// The root path was empty.
    #[error("empty root path")]
    Empty,

    /// The root could not be made absolute against the current
    /// directory.
    #[error("cannot resolve root path \"{}\"", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
