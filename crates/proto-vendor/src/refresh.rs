use std::path::Path;

use crate::cleanup;
use crate::overlay;
use crate::source::UpstreamSource;
use crate::sync::{SnapshotFetcher, SyncError};

/// Everything one refresh run does: which namespace folders are wiped,
/// which snapshots are fetched (in order), and where local overrides land.
pub struct RefreshPlan {
    pub namespaces: Vec<String>,
    pub sources: Vec<UpstreamSource>,
    /// Directory of operator-maintained files, relative to the root.
    pub overrides_dir: String,
    /// Namespace folder the overrides are copied onto.
    pub overlay_dest: String,
}

/// Outcome of one fetched snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub label: String,
    pub extracted: u64,
}

/// Outcome of a full refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub sources: Vec<SourceReport>,
    pub overrides_applied: bool,
}

/// Run the refresh sequence under `root`: wipe the tracked namespaces,
/// fetch every snapshot in order, then overlay local overrides.
///
/// Each fetch is awaited to completion before the next begins, and the
/// first error aborts the remainder of the sequence, overlay included.
pub async fn refresh(
    root: &Path,
    plan: &RefreshPlan,
    fetcher: &dyn SnapshotFetcher,
) -> Result<RefreshReport, SyncError> {
    cleanup::remove_namespaces(root, &plan.namespaces)?;

    let mut sources = Vec::with_capacity(plan.sources.len());
    for source in &plan.sources {
        let extracted = fetcher.fetch(source, root).await?;
        sources.push(SourceReport {
            label: source.label.clone(),
            extracted,
        });
    }

    let overrides_applied = overlay::apply(
        &root.join(&plan.overrides_dir),
        &root.join(&plan.overlay_dest),
    )?;

    Ok(RefreshReport {
        sources,
        overrides_applied,
    })
}
