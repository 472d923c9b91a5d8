//! # lazywalk
//!
//! Lazy, depth-bounded directory walker — embeddable, one error per
//! unreadable directory, zero opinions.
//!
//! lazywalk walks a directory tree depth-first and yields one element
//! per node, lazily: nothing is listed until the consumer pulls, and no
//! more than the current directory's child list is ever buffered. A
//! directory that cannot be listed becomes a single [`WalkError`]
//! element in the stream — the traversal itself never aborts. It does
//! **not** sort, filter, follow content, or parallelize — those belong
//! to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use lazywalk::walk;
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("a.txt"), "")?;
//! std::fs::create_dir(dir.path().join("b"))?;
//! std::fs::write(dir.path().join("b").join("c.txt"), "")?;
//!
//! for item in walk(dir.path()).start()? {
//!     match item {
//!         Ok(entry) => println!("{} {}", entry.depth, entry.path.display()),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Depth is counted from the root's direct children (depth 0), and a
//! depth limit bounds how deep directory contents are still listed:
//!
//! ```rust
//! use lazywalk::walk;
//!
//! # let dir = tempfile::tempdir()?;
//! # std::fs::create_dir_all(dir.path().join("a").join("b"))?;
//! // Only the root's immediate children; nothing is recursed into.
//! let names: Vec<String> = walk(dir.path())
//!     .depth_limit(0)
//!     .start()?
//!     .filter_map(|item| item.ok())
//!     .map(|entry| entry.name)
//!     .collect();
//! assert_eq!(names, ["a"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom Listers
//!
//! Implement [`Lister`] to walk anything tree-shaped:
//!
//! ```rust
//! use std::path::Path;
//! use lazywalk::{walk, EntryKind, ErrorCause, Lister, Listing};
//!
//! /// A two-level tree that exists only in memory.
//! struct Fixture;
//!
//! impl Lister for Fixture {
//!     fn list_dir(&self, dir: &Path) -> Result<Vec<Listing>, ErrorCause> {
//!         let children: &[(&str, EntryKind)] = if dir == Path::new("/fixture") {
//!             &[("sub", EntryKind::Dir)]
//!         } else {
//!             &[("leaf.txt", EntryKind::File)]
//!         };
//!         Ok(children
//!             .iter()
//!             .map(|(name, kind)| Listing { file_name: (*name).into(), kind: *kind })
//!             .collect())
//!     }
//! }
//!
//! let depths: Vec<usize> = walk("/fixture")
//!     .with_lister(Fixture)
//!     .start()?
//!     .map(|item| item.unwrap().depth)
//!     .collect();
//! assert_eq!(depths, [0, 1]);
//! # Ok::<(), lazywalk::InvalidRootError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod root;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::WalkBuilder;
pub use engine::Walk;
pub use entry::{Entry, EntryKind};
pub use error::{ErrorCause, InvalidRootError, WalkError};
pub use root::RootPath;
pub use traits::{Lister, Listing, OsLister};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`WalkBuilder`] rooted at `root`.
///
/// `root` is either a structured filesystem location (`&Path`,
/// `PathBuf`) or a plain path string (`&str`, `String`); see
/// [`RootPath`]. Relative roots are resolved against the current
/// directory when [`start()`](WalkBuilder::start) is called.
///
/// # Example
///
/// ```rust
/// use lazywalk::walk;
///
/// # let dir = tempfile::tempdir()?;
/// # std::fs::write(dir.path().join("note.txt"), "")?;
/// let entries: Vec<_> = walk(dir.path())
///     .start()?
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].is_file());
/// assert_eq!(entries[0].path, dir.path().join("note.txt"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn walk(root: impl Into<RootPath>) -> WalkBuilder {
    WalkBuilder::new(root.into())
}
