use std::path::Path;
use std::sync::Mutex;

use crate::source::UpstreamSource;
use crate::sync::{SnapshotFetcher, SyncError};

/// In-memory fetcher for testing. Records call order and writes nothing.
pub struct RecordingFetcher {
    events: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// A fetcher that fails with a network error when it reaches the
    /// source with the given label.
    pub fn failing_on(label: impl Into<String>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_on: Some(label.into()),
        }
    }

    /// Every `start`/`end` event observed so far, in order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Default for RecordingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SnapshotFetcher for RecordingFetcher {
    async fn fetch(&self, source: &UpstreamSource, _dest_root: &Path) -> Result<u64, SyncError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {}", source.label));

        if self.fail_on.as_deref() == Some(source.label.as_str()) {
            return Err(SyncError::Network(format!(
                "simulated failure for {}",
                source.label
            )));
        }

        self.events
            .lock()
            .unwrap()
            .push(format!("end {}", source.label));
        Ok(0)
    }
}
