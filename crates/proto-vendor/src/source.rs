use crate::filter::ExtractOptions;

/// One upstream repository whose snapshot supplies vendored proto files.
pub struct UpstreamSource {
    /// Human-readable label used in progress reporting.
    pub label: String,
    /// Archive download endpoint for the default-branch snapshot.
    pub archive_url: String,
    pub options: ExtractOptions,
}

impl UpstreamSource {
    pub fn new(
        label: impl Into<String>,
        archive_url: impl Into<String>,
        options: ExtractOptions,
    ) -> Self {
        Self {
            label: label.into(),
            archive_url: archive_url.into(),
            options,
        }
    }
}
