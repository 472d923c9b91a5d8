use std::path::PathBuf;

use crate::entry::{Entry, EntryKind};
use crate::error::WalkError;
use crate::traits::{Lister, Listing};

// ---------------------------------------------------------------------------
// Walk
// ---------------------------------------------------------------------------

/// The lazy traversal sequence returned by
/// [`WalkBuilder::start`](crate::WalkBuilder::start).
///
/// A pull-driven, single-pass iterator: each element is computed only
/// when the consumer asks for the next one, and the blocking listing
/// call runs on the consumer's thread at that moment. The only state
/// held across pulls is the current directory's remaining child list
/// per open level — dropping the iterator mid-traversal leaks nothing.
///
/// Recursion is modeled with an explicit stack, so call-stack depth does
/// not grow with the tree; memory grows with traversal depth only.
pub struct Walk {
    lister: Box<dyn Lister>,
    depth_limit: Option<usize>,
    /// A directory whose entry was just yielded, due to be listed before
    /// its next sibling is pulled. The root starts here at depth 0.
    descend: Option<(PathBuf, usize)>,
    stack: Vec<Level>,
}

/// One partially-drained directory on the traversal stack.
struct Level {
    dir: PathBuf,
    depth: usize,
    children: std::vec::IntoIter<Listing>,
}

impl Walk {
    pub(crate) fn new(root: PathBuf, depth_limit: Option<usize>, lister: Box<dyn Lister>) -> Self {
        Self {
            lister,
            depth_limit,
            descend: Some((root, 0)),
            stack: Vec::new(),
        }
    }

    /// Whether a directory yielded at `depth` still gets its contents
    /// listed. A limit of 0 means only the root's immediate children.
    fn within_limit(&self, depth: usize) -> bool {
        self.depth_limit.map_or(true, |limit| depth < limit)
    }
}

impl Iterator for Walk {
    type Item = Result<Entry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // A pending directory is listed before anything else, so its
            // stream splices in right after its own entry and before its
            // next sibling. A failed listing contributes no level: the
            // subtree reduces to this one error and traversal resumes at
            // the parent.
            if let Some((dir, depth)) = self.descend.take() {
                match self.lister.list_dir(&dir) {
                    Ok(children) => self.stack.push(Level {
                        dir,
                        depth,
                        children: children.into_iter(),
                    }),
                    Err(cause) => {
                        return Some(Err(WalkError {
                            depth,
                            path: dir,
                            cause,
                        }))
                    }
                }
                continue;
            }

            let level = self.stack.last_mut()?;
            let Some(child) = level.children.next() else {
                self.stack.pop();
                continue;
            };

            let depth = level.depth;
            let path = level.dir.join(&child.file_name);
            let name = child.file_name.to_string_lossy().into_owned();

            if child.kind == EntryKind::Dir && self.within_limit(depth) {
                self.descend = Some((path.clone(), depth + 1));
            }

            return Some(Ok(Entry {
                path,
                name,
                kind: child.kind,
                depth,
            }));
        }
    }
}

impl std::fmt::Debug for Walk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("depth_limit", &self.depth_limit)
            .field("descend", &self.descend)
            .field("open_levels", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl std::iter::FusedIterator for Walk {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
