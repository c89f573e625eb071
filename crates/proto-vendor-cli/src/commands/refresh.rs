use std::path::Path;

use anyhow::Result;
use proto_vendor_archive::ArchiveClient;

use crate::config::RefreshConfig;

/// Run the full refresh sequence and print a per-source summary.
pub async fn run(root: &Path, config: RefreshConfig) -> Result<()> {
    let plan = config.into_plan();
    println!("Refreshing {} upstream snapshots...", plan.sources.len());

    let fetcher = ArchiveClient::new();
    let report = proto_vendor::refresh(root, &plan, &fetcher).await?;

    for source in &report.sources {
        println!(
            "Extracted {} proto files from {}.",
            source.extracted, source.label
        );
    }
    if report.overrides_applied {
        println!("Applied local overrides.");
    }

    Ok(())
}
