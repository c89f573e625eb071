use std::fs;
use std::io;
use std::path::Path;

use crate::sync::SyncError;

/// Remove the tracked namespace folders under `root`.
///
/// Runs before any snapshot is fetched so stale files never survive a
/// refresh. Folders that do not exist are skipped.
pub fn remove_namespaces(root: &Path, namespaces: &[String]) -> Result<(), SyncError> {
    for namespace in namespaces {
        match fs::remove_dir_all(root.join(namespace)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
