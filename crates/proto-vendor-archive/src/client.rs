use std::io::Write;
use std::path::{Path, PathBuf};

use proto_vendor::{SnapshotFetcher, SyncError, UpstreamSource};
use tempfile::{Builder, NamedTempFile};

use crate::extract;

/// HTTP client for downloading upstream archive snapshots.
///
/// Each fetch streams the zip body into a scratch file, unpacks the
/// admitted entries under the destination root, and removes the scratch
/// file before resolving.
pub struct ArchiveClient {
    client: reqwest::Client,
    scratch_dir: Option<PathBuf>,
}

impl ArchiveClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            scratch_dir: None,
        }
    }

    /// Keep scratch archives under `dir` instead of the platform temp
    /// directory.
    pub fn with_scratch_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            scratch_dir: Some(dir.into()),
        }
    }

    async fn download(&self, url: &str) -> Result<NamedTempFile, SyncError> {
        let mut response = self
            .client
            .get(url)
            .header("User-Agent", "proto-vendor")
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("snapshot download failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SyncError::Network(format!(
                "snapshot download returned HTTP {}",
                response.status()
            )));
        }

        let mut builder = Builder::new();
        builder.suffix(".zip");
        let mut scratch = match &self.scratch_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SyncError::Network(format!("failed to read snapshot body: {e}")))?
        {
            scratch.as_file_mut().write_all(&chunk)?;
        }
        scratch.as_file_mut().flush()?;

        Ok(scratch)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SnapshotFetcher for ArchiveClient {
    async fn fetch(&self, source: &UpstreamSource, dest_root: &Path) -> Result<u64, SyncError> {
        let scratch = self.download(&source.archive_url).await?;
        let written = extract::unpack(scratch.path(), &source.options, dest_root)?;
        scratch.close()?;
        Ok(written)
    }
}
