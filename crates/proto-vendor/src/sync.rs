use std::path::Path;

use crate::source::UpstreamSource;

/// Errors that can occur while refreshing the vendored tree.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("network error: {0}")]
    Network(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads one upstream snapshot and populates the destination tree.
///
/// An implementation resolves only after its extraction has finished and
/// any scratch artifact it created has been removed, so callers can rely
/// on fetches being strictly sequential.
#[async_trait::async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Fetch `source` into `dest_root`. Returns the number of files written.
    async fn fetch(&self, source: &UpstreamSource, dest_root: &Path) -> Result<u64, SyncError>;
}
