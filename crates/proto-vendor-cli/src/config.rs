use std::path::Path;

use proto_vendor::{EntryRules, ExtractOptions, RefreshPlan, UpstreamSource};
use serde::{Deserialize, Serialize};

/// Name of the optional configuration file under the working root.
pub const CONFIG_FILE: &str = "proto-vendor.toml";

/// Top-level refresh configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Namespace folders wiped before fetching.
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
    #[serde(default = "default_overrides_dir")]
    pub overrides_dir: String,
    /// Namespace folder local overrides are copied onto.
    #[serde(default = "default_overlay_dest")]
    pub overlay_dest: String,
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceEntry>,
}

/// One upstream snapshot definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceEntry {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub strip: usize,
    #[serde(flatten)]
    pub rules: EntryRules,
}

impl SourceEntry {
    pub fn into_source(self) -> UpstreamSource {
        UpstreamSource::new(
            self.label,
            self.url,
            ExtractOptions::with_rules(self.strip, self.rules),
        )
    }
}

impl RefreshConfig {
    pub fn into_plan(self) -> RefreshPlan {
        RefreshPlan {
            namespaces: self.namespaces,
            sources: self
                .sources
                .into_iter()
                .map(SourceEntry::into_source)
                .collect(),
            overrides_dir: self.overrides_dir,
            overlay_dest: self.overlay_dest,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            namespaces: default_namespaces(),
            overrides_dir: default_overrides_dir(),
            overlay_dest: default_overlay_dest(),
            sources: default_sources(),
        }
    }
}

fn default_namespaces() -> Vec<String> {
    vec!["envoy".into(), "google".into()]
}

fn default_overrides_dir() -> String {
    "overrides".into()
}

fn default_overlay_dest() -> String {
    "google".into()
}

/// Built-in registry of upstream sources: the RPC-gateway data-plane
/// API, the cloud provider's service APIs, and the serialization
/// library's core schemas.
pub fn default_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry {
            label: "envoy-data-plane-api".into(),
            url: "https://github.com/envoyproxy/data-plane-api/archive/master.zip".into(),
            strip: 1,
            rules: EntryRules {
                parent_prefix: Some("envoy".into()),
                ..EntryRules::default()
            },
        },
        SourceEntry {
            label: "googleapis".into(),
            url: "https://github.com/googleapis/googleapis/archive/master.zip".into(),
            strip: 1,
            rules: EntryRules::default(),
        },
        SourceEntry {
            label: "protobuf".into(),
            url: "https://github.com/google/protobuf/archive/master.zip".into(),
            strip: 2,
            rules: EntryRules {
                parent_prefix: Some("src".into()),
                exclude_dirs: vec!["internal".into()],
                exclude_names: vec!["test".into()],
            },
        },
    ]
}

/// Load config from `root`, falling back to the built-in sources when
/// the file is missing or does not parse.
pub fn load_config(root: &Path) -> RefreshConfig {
    let path = root.join(CONFIG_FILE);
    if let Ok(contents) = std::fs::read_to_string(&path) {
        if let Ok(config) = toml::from_str::<RefreshConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using built-in sources",
            path.display()
        );
    }

    RefreshConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_cover_the_three_upstreams() {
        let sources = default_sources();
        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].label, "envoy-data-plane-api");
        assert_eq!(sources[1].label, "googleapis");
        assert_eq!(sources[2].label, "protobuf");

        assert_eq!(sources[0].strip, 1);
        assert_eq!(sources[1].strip, 1);
        assert_eq!(sources[2].strip, 2);

        assert_eq!(sources[0].rules.parent_prefix.as_deref(), Some("envoy"));
        assert!(sources[1].rules.is_empty());
        assert_eq!(sources[2].rules.exclude_dirs, vec!["internal"]);
        assert_eq!(sources[2].rules.exclude_names, vec!["test"]);
    }

    #[test]
    fn default_plan_keeps_the_fixed_namespaces_and_overlay() {
        let plan = RefreshConfig::default().into_plan();
        assert_eq!(plan.namespaces, vec!["envoy", "google"]);
        assert_eq!(plan.overrides_dir, "overrides");
        assert_eq!(plan.overlay_dest, "google");
        assert_eq!(plan.sources.len(), 3);
    }

    #[test]
    fn unfiltered_sources_carry_no_predicate() {
        let plan = RefreshConfig::default().into_plan();
        assert!(plan.sources[0].options.filter.is_some());
        assert!(plan.sources[1].options.filter.is_none());
        assert!(plan.sources[2].options.filter.is_some());
    }

    #[test]
    fn parse_source_from_toml() {
        let toml_str = r#"
[[sources]]
label = "my-protos"
url = "https://example.com/archive/main.zip"
strip = 1
parent_prefix = "api"
exclude_dirs = ["vendor"]
exclude_names = ["draft"]
"#;
        let config: RefreshConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sources.len(), 1);

        let source = &config.sources[0];
        assert_eq!(source.label, "my-protos");
        assert_eq!(source.strip, 1);
        assert_eq!(source.rules.parent_prefix.as_deref(), Some("api"));
        assert_eq!(source.rules.exclude_dirs, vec!["vendor"]);
        assert_eq!(source.rules.exclude_names, vec!["draft"]);
    }

    #[test]
    fn strip_and_rules_default_when_absent() {
        let toml_str = r#"
[[sources]]
label = "bare"
url = "https://example.com/archive/main.zip"
"#;
        let config: RefreshConfig = toml::from_str(toml_str).unwrap();
        let source = &config.sources[0];
        assert_eq!(source.strip, 0);
        assert!(source.rules.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: RefreshConfig = toml::from_str("").unwrap();
        assert_eq!(config.namespaces, vec!["envoy", "google"]);
        assert_eq!(config.overlay_dest, "google");
        assert_eq!(config.sources.len(), 3);
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.sources.len(), 3);
    }

    #[test]
    fn load_config_reads_file_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
namespaces = ["custom"]

[[sources]]
label = "only"
url = "https://example.com/archive/main.zip"
strip = 1
"#,
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.namespaces, vec!["custom"]);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].label, "only");
    }
}
