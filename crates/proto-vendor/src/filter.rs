use serde::{Deserialize, Serialize};

use crate::entry::ArchiveEntry;

/// Caller-supplied admission predicate over archive entries.
pub type EntryPredicate = Box<dyn Fn(&ArchiveEntry) -> bool + Send + Sync>;

/// How entries of one snapshot are selected and placed.
///
/// The fixed rule that an entry's extension must be exactly `proto` is
/// always applied; `filter` narrows the selection further.
pub struct ExtractOptions {
    /// Leading path segments dropped from each entry before it is
    /// written under the destination root.
    pub strip: usize,
    pub filter: Option<EntryPredicate>,
}

impl ExtractOptions {
    pub fn new(strip: usize) -> Self {
        Self {
            strip,
            filter: None,
        }
    }

    pub fn with_filter(strip: usize, filter: EntryPredicate) -> Self {
        Self {
            strip,
            filter: Some(filter),
        }
    }

    /// Options whose predicate is the given rule set.
    pub fn with_rules(strip: usize, rules: EntryRules) -> Self {
        Self {
            strip,
            filter: rules.into_predicate(),
        }
    }

    /// Whether `entry` should be written to disk.
    pub fn admits(&self, entry: &ArchiveEntry) -> bool {
        if let Some(filter) = &self.filter
            && !filter(entry)
        {
            return false;
        }
        entry.has_extension("proto")
    }
}

/// Drop `strip` leading path segments from `path`.
///
/// Returns `None` when the path has no components left, in which case
/// the entry cannot be placed and is skipped.
pub fn strip_components(path: &str, strip: usize) -> Option<&str> {
    let mut rest = path;
    for _ in 0..strip {
        rest = rest.split_once('/')?.1;
    }
    (!rest.is_empty()).then_some(rest)
}

/// Data form of an entry filter, as it appears in configuration.
///
/// All rules operate on the entry path relative to the snapshot root
/// folder; an empty rule set converts to no predicate at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntryRules {
    /// Folder, relative to the snapshot root, the entry's parent path
    /// must live under.
    pub parent_prefix: Option<String>,
    /// Path segments that disqualify an entry wherever they appear.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    /// Substrings that disqualify an entry when found in its file name.
    #[serde(default)]
    pub exclude_names: Vec<String>,
}

impl EntryRules {
    pub fn is_empty(&self) -> bool {
        self.parent_prefix.is_none()
            && self.exclude_dirs.is_empty()
            && self.exclude_names.is_empty()
    }

    pub fn matches(&self, entry: &ArchiveEntry) -> bool {
        let Some(relative) = entry.without_root() else {
            // Entries outside the snapshot root folder never match a rule set.
            return false;
        };
        let parent = match relative.rfind('/') {
            Some(idx) => &relative[..idx],
            None => "",
        };

        if let Some(prefix) = &self.parent_prefix
            && !starts_with_folder(parent, prefix)
        {
            return false;
        }

        if parent
            .split('/')
            .any(|segment| self.exclude_dirs.iter().any(|dir| dir == segment))
        {
            return false;
        }

        let name = entry.file_name();
        !self.exclude_names.iter().any(|needle| name.contains(needle.as_str()))
    }

    /// Convert into a predicate, or `None` when nothing is restricted.
    pub fn into_predicate(self) -> Option<EntryPredicate> {
        if self.is_empty() {
            return None;
        }
        Some(Box::new(move |entry| self.matches(entry)))
    }
}

/// Whether `path` is `folder` itself or lies beneath it.
fn starts_with_folder(path: &str, folder: &str) -> bool {
    path == folder
        || path
            .strip_prefix(folder)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_rules() -> EntryRules {
        EntryRules {
            parent_prefix: Some("envoy".into()),
            ..EntryRules::default()
        }
    }

    fn schema_library_rules() -> EntryRules {
        EntryRules {
            parent_prefix: Some("src".into()),
            exclude_dirs: vec!["internal".into()],
            exclude_names: vec!["test".into()],
        }
    }

    #[test]
    fn gateway_rules_require_namespace_parent() {
        let rules = gateway_rules();
        assert!(rules.matches(&ArchiveEntry::new(
            "data-plane-api-master/envoy/api/v2/cds.proto"
        )));
        assert!(!rules.matches(&ArchiveEntry::new(
            "data-plane-api-master/docs/cds.proto"
        )));
        // A sibling folder that merely shares the name as a prefix.
        assert!(!rules.matches(&ArchiveEntry::new(
            "data-plane-api-master/envoy2/api/cds.proto"
        )));
    }

    #[test]
    fn gateway_rules_reject_entries_outside_snapshot_root() {
        assert!(!gateway_rules().matches(&ArchiveEntry::new("cds.proto")));
    }

    #[test]
    fn schema_library_rules_exclude_test_file_names() {
        let rules = schema_library_rules();
        assert!(!rules.matches(&ArchiveEntry::new(
            "protobuf-master/src/google/protobuf/unittest.proto"
        )));
        assert!(!rules.matches(&ArchiveEntry::new(
            "protobuf-master/src/google/protobuf/map_test_util.proto"
        )));
        assert!(rules.matches(&ArchiveEntry::new(
            "protobuf-master/src/google/protobuf/any.proto"
        )));
    }

    #[test]
    fn schema_library_rules_exclude_internal_segments() {
        let rules = schema_library_rules();
        assert!(!rules.matches(&ArchiveEntry::new(
            "protobuf-master/src/google/protobuf/util/internal/datapiece.proto"
        )));
        assert!(rules.matches(&ArchiveEntry::new(
            "protobuf-master/src/google/protobuf/util/json_format.proto"
        )));
    }

    #[test]
    fn schema_library_rules_require_src_parent() {
        let rules = schema_library_rules();
        assert!(!rules.matches(&ArchiveEntry::new(
            "protobuf-master/docs/example.proto"
        )));
    }

    #[test]
    fn empty_rules_convert_to_no_predicate() {
        assert!(EntryRules::default().into_predicate().is_none());
        assert!(schema_library_rules().into_predicate().is_some());
    }

    #[test]
    fn admits_requires_proto_extension() {
        let options = ExtractOptions::new(1);
        assert!(options.admits(&ArchiveEntry::new("root/a.proto")));
        assert!(!options.admits(&ArchiveEntry::new("root/a.md")));
        assert!(!options.admits(&ArchiveEntry::new("root/BUILD")));
    }

    #[test]
    fn admits_combines_predicate_with_extension_rule() {
        let options = ExtractOptions::with_filter(
            1,
            Box::new(|entry| entry.path().contains("keep")),
        );
        assert!(options.admits(&ArchiveEntry::new("root/keep/a.proto")));
        assert!(!options.admits(&ArchiveEntry::new("root/drop/a.proto")));
        assert!(!options.admits(&ArchiveEntry::new("root/keep/a.md")));
    }

    #[test]
    fn strip_drops_leading_segments() {
        assert_eq!(strip_components("a/b/c/d.proto", 0), Some("a/b/c/d.proto"));
        assert_eq!(strip_components("a/b/c/d.proto", 2), Some("c/d.proto"));
        assert_eq!(strip_components("a/b/c/d.proto", 3), Some("d.proto"));
    }

    #[test]
    fn strip_exhausting_the_path_yields_none() {
        assert_eq!(strip_components("a/b.proto", 2), None);
        assert_eq!(strip_components("b.proto", 1), None);
    }
}
