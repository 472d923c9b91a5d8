use std::path::{Component, Path, PathBuf};

use crate::error::InvalidRootError;

/// The two accepted forms of a traversal root.
///
/// A closed set: anything that is neither a filesystem location nor a
/// path string cannot be handed to [`walk()`](crate::walk) at all, so
/// the remaining configuration faults are an empty root and a root the
/// OS cannot make absolute — both reported by
/// [`WalkBuilder::start`](crate::WalkBuilder::start).
#[derive(Debug, Clone)]
pub enum RootPath {
    /// A structured filesystem location (`&Path`, `PathBuf`).
    Reference(PathBuf),

    /// A plain path string (`&str`, `String`).
    Text(String),
}

impl From<PathBuf> for RootPath {
    fn from(path: PathBuf) -> Self {
        Self::Reference(path)
    }
}

impl From<&Path> for RootPath {
    fn from(path: &Path) -> Self {
        Self::Reference(path.to_path_buf())
    }
}

impl From<String> for RootPath {
    fn from(path: String) -> Self {
        Self::Text(path)
    }
}

impl From<&str> for RootPath {
    fn from(path: &str) -> Self {
        Self::Text(path.to_owned())
    }
}

impl RootPath {
    /// Resolve into the single canonical absolute path traversal starts
    /// from.
    ///
    /// Purely lexical: the root is made absolute against the current
    /// directory and `.`/`..` segments are collapsed, without touching
    /// the filesystem. Whether the path actually exists (or is a
    /// directory at all) is the first listing call's problem, reported
    /// as a [`WalkError`](crate::WalkError) in the stream.
    pub(crate) fn resolve(&self) -> Result<PathBuf, InvalidRootError> {
        let raw = match self {
            Self::Reference(path) => path.as_path(),
            Self::Text(text) => Path::new(text),
        };

        if raw.as_os_str().is_empty() {
            return Err(InvalidRootError::Empty);
        }

        let absolute =
            std::path::absolute(raw).map_err(|source| InvalidRootError::Resolve {
                path: raw.to_path_buf(),
                source,
            })?;

        Ok(collapse(&absolute))
    }
}

/// Collapse `.` and `..` components of an already-absolute path.
///
/// `..` never pops past the root, matching how the OS resolves `/..`.
fn collapse(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            _ => out.push(component.as_os_str()),
        }
    }
    out
}
