use std::ffi::OsString;
use std::path::Path;

use crate::entry::EntryKind;
use crate::error::ErrorCause;

/// One child of a directory listing: its base name and OS-reported kind.
///
/// The kind travels with the name so the engine never has to `stat()` a
/// child separately — once a listing succeeds, its children cannot fail.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Base name of the child, as the OS reports it.
    pub file_name: OsString,

    /// The child's kind, taken from the same listing call.
    pub kind: EntryKind,
}

/// A source of directory listings to traverse.
///
/// Implement this to walk anything tree-shaped — an archive, a remote
/// share, an in-memory fixture — or to wrap [`OsLister`] and inject
/// faults in tests. The builder stores listers as `Box<dyn Lister>`, so
/// the trait is object-safe.
///
/// # Error Handling
///
/// `list_dir` is the single failure point per directory. Return `Err`
/// for an unreadable directory and the engine yields exactly one
/// [`WalkError`](crate::WalkError) for it, then moves on — it never
/// aborts the traversal.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use lazywalk::{ErrorCause, Lister, Listing, OsLister};
///
/// /// Delegates to the OS but refuses one subtree.
/// struct Deny {
///     inner: OsLister,
///     path: std::path::PathBuf,
/// }
///
/// impl Lister for Deny {
///     fn list_dir(&self, dir: &Path) -> Result<Vec<Listing>, ErrorCause> {
///         if dir == self.path {
///             return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into());
///         }
///         self.inner.list_dir(dir)
///     }
/// }
/// ```
pub trait Lister {
    /// List `dir`'s direct children with their type information, in the
    /// order the underlying source returns them. The engine imposes no
    /// sorting of its own.
    fn list_dir(&self, dir: &Path) -> Result<Vec<Listing>, ErrorCause>;
}

/// The default lister, backed by [`std::fs::read_dir`].
///
/// Materializes the full child list in one call — opening the
/// directory, iterating its entries and reading each child's type all
/// count as that one listing, so any fault among them becomes the
/// directory's single error.
pub struct OsLister;

impl Lister for OsLister {
    fn list_dir(&self, dir: &Path) -> Result<Vec<Listing>, ErrorCause> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            children.push(Listing {
                file_name: entry.file_name(),
                kind: file_type.into(),
            });
        }
        Ok(children)
    }
}
