use std::fs;
use std::io;
use std::path::Path;

use crate::sync::SyncError;

/// Copy the contents of `overrides` on top of `dest`, replacing files
/// that were just extracted. Returns whether anything was applied.
///
/// A missing `overrides` directory is a no-op. Any other failure during
/// the copy aborts the run.
pub fn apply(overrides: &Path, dest: &Path) -> Result<bool, SyncError> {
    if !overrides.is_dir() {
        return Ok(false);
    }
    copy_tree(overrides, dest)?;
    Ok(true)
}

fn copy_tree(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
