use std::fs::FileType;
use std::path::PathBuf;

/// A single filesystem node observed during traversal.
///
/// Produced once per child of one successful directory listing, then owned
/// by the consumer — the engine never touches it again. `path` is always
/// absolute and always equals the parent directory's resolved path joined
/// with `name`.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Absolute path to the node.
    pub path: PathBuf,

    /// Base name of the node as reported by the OS, converted lossily
    /// to UTF-8. The raw name is preserved inside `path`.
    pub name: String,

    /// What kind of node this is, as reported by the listing call.
    pub kind: EntryKind,

    /// How deep in the traversal this node was found. The root's direct
    /// children are depth 0.
    pub depth: usize,
}

impl Entry {
    /// Returns `true` if this node is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Returns `true` if this node is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Returns `true` if this node is a block device.
    pub fn is_block_device(&self) -> bool {
        self.kind == EntryKind::BlockDevice
    }

    /// Returns `true` if this node is a character device.
    pub fn is_char_device(&self) -> bool {
        self.kind == EntryKind::CharDevice
    }

    /// Returns `true` if this node is a named pipe.
    pub fn is_fifo(&self) -> bool {
        self.kind == EntryKind::Fifo
    }

    /// Returns `true` if this node is a Unix domain socket.
    pub fn is_socket(&self) -> bool {
        self.kind == EntryKind::Socket
    }
}

/// The kind of a traversed node.
///
/// Captured from the OS-reported [`FileType`] at listing time, so kind
/// queries never perform their own `stat()` and never fail. The device,
/// pipe and socket variants only occur on Unix; elsewhere such nodes
/// classify as [`Other`](EntryKind::Other).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// A block device.
    BlockDevice,

    /// A character device.
    CharDevice,

    /// A named pipe (FIFO).
    Fifo,

    /// A Unix domain socket.
    Socket,

    /// Anything the OS reports that none of the above cover.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_symlink() {
            Self::Symlink
        } else {
            special_kind(file_type)
        }
    }
}

#[cfg(unix)]
fn special_kind(file_type: FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_block_device() {
        EntryKind::BlockDevice
    } else if file_type.is_char_device() {
        EntryKind::CharDevice
    } else if file_type.is_fifo() {
        EntryKind::Fifo
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else {
        EntryKind::Other
    }
}

#[cfg(not(unix))]
fn special_kind(_file_type: FileType) -> EntryKind {
    EntryKind::Other
}
