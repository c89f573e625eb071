pub mod cleanup;
pub mod entry;
pub mod filter;
pub mod overlay;
pub mod refresh;
pub mod source;
pub mod sync;

pub use entry::ArchiveEntry;
pub use filter::{EntryPredicate, EntryRules, ExtractOptions, strip_components};
pub use refresh::{RefreshPlan, RefreshReport, SourceReport, refresh};
pub use source::UpstreamSource;
pub use sync::{SnapshotFetcher, SyncError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
