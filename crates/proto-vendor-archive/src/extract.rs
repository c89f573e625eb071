use std::fs::{self, File};
use std::io;
use std::path::Path;

use proto_vendor::{ArchiveEntry, ExtractOptions, SyncError, strip_components};

/// Unpack the zip at `archive` under `dest_root`, writing only the
/// entries `options` admits, with the strip count applied to each
/// entry's path. Returns the number of files written.
pub fn unpack(
    archive: &Path,
    options: &ExtractOptions,
    dest_root: &Path,
) -> Result<u64, SyncError> {
    let file = File::open(archive)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| SyncError::Archive(format!("failed to open snapshot archive: {e}")))?;

    let mut written = 0u64;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| SyncError::Archive(format!("failed to read archive entry: {e}")))?;
        if entry.is_dir() {
            continue;
        }
        // Entries whose names would escape the destination are skipped.
        if entry.enclosed_name().is_none() {
            continue;
        }

        let descriptor = ArchiveEntry::new(entry.name());
        if !options.admits(&descriptor) {
            continue;
        }
        let Some(relative) = strip_components(descriptor.path(), options.strip) else {
            continue;
        };

        let dest = dest_root.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&dest)?;
        io::copy(&mut entry, &mut out)?;
        written += 1;
    }

    Ok(written)
}
