use std::path::Path;

/// A single file entry inside an upstream archive snapshot.
///
/// Paths use `/` separators as recorded in the archive, including the
/// snapshot root folder the hosting platform prepends (e.g.
/// `protobuf-master/src/google/protobuf/any.proto`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    path: String,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Full archived path, snapshot root included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// Directory portion of the path, empty for top-level entries.
    pub fn parent(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }

    /// Path with the snapshot root folder removed.
    ///
    /// Snapshot archives place every file under a single root directory;
    /// entries at the top level (the root itself, stray metadata) have no
    /// meaningful path beneath it and yield `None`.
    pub fn without_root(&self) -> Option<&str> {
        let (_, rest) = self.path.split_once('/')?;
        (!rest.is_empty()).then_some(rest)
    }

    /// Whether the entry's extension is exactly `ext` (no leading dot).
    pub fn has_extension(&self, ext: &str) -> bool {
        Path::new(&self.path)
            .extension()
            .is_some_and(|found| found == ext)
    }
}
