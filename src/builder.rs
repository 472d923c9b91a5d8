use crate::engine::Walk;
use crate::error::InvalidRootError;
use crate::root::RootPath;
use crate::traits::{Lister, OsLister};

/// Entry point for configuring a traversal.
///
/// Created via [`walk()`](crate::walk). Configure with chained builder
/// methods, then call [`start()`](WalkBuilder::start) to obtain the
/// lazy sequence.
///
/// # Example
///
/// ```rust,ignore
/// let walk = lazywalk::walk("/var/log")
///     .depth_limit(2)
///     .start()?;
/// ```
pub struct WalkBuilder {
    root: RootPath,
    depth_limit: Option<usize>,
    lister: Box<dyn Lister>,
}

impl WalkBuilder {
    pub(crate) fn new(root: RootPath) -> Self {
        Self {
            root,
            depth_limit: None,
            lister: Box::new(OsLister),
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Maximum depth at which directory contents are still listed.
    ///
    /// `0` means only the root's immediate children are yielded — no
    /// recursion at all. Unbounded by default. Directories sitting at
    /// the limit are simply not listed; that is not a fault and produces
    /// no error.
    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Replace the OS-backed listing call with a custom [`Lister`].
    ///
    /// Any type implementing [`Lister`] is accepted — in-memory fixtures,
    /// archives, fault-injecting wrappers around [`OsLister`], etc.
    pub fn with_lister(mut self, lister: impl Lister + 'static) -> Self {
        self.lister = Box::new(lister);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Normalize the root and return the lazy traversal, started at
    /// depth 0.
    ///
    /// The returned [`Walk`] is single-pass: once consumed it cannot be
    /// re-iterated, and a fresh [`walk()`](crate::walk) call is required
    /// to traverse again.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for configuration faults — an empty root, or a
    /// root the OS cannot make absolute — detected here, before any
    /// element is produced. An unreadable or nonexistent root is not a
    /// configuration fault: it surfaces as the stream's first (and only)
    /// [`WalkError`](crate::WalkError).
    pub fn start(self) -> Result<Walk, InvalidRootError> {
        let root = self.root.resolve()?;
        Ok(Walk::new(root, self.depth_limit, self.lister))
    }
}
