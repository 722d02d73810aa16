/*
[INPUT]:  Optional YAML configuration file and HECATE__* environment variables
[OUTPUT]: Parsed and validated dashboard configuration
[POS]:    Configuration layer - API endpoint, UI options, seed clusters
[UPDATE]: When adding new configuration options
*/

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use hecate_client::{ClientConfig, ClusterData, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::ui::components::task_form::FormVariant;

/// Environment variable prefix, e.g. `HECATE__API__BASE_URL`
pub const ENV_PREFIX: &str = "HECATE";

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Task backend connection settings
    pub api: ApiConfig,
    /// Terminal UI options
    pub ui: UiConfig,
    /// Directory for rolling log files; logs stay in memory when unset
    pub log_dir: Option<PathBuf>,
    /// Clusters listed in the dashboard
    pub clusters: Vec<ClusterData>,
}

/// Task backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Bearer token sent with every request
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            token: None,
        }
    }
}

/// Terminal UI options
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Chrome used for the task creation form
    pub form_variant: FormVariant,
    /// Redraw interval in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_variant: FormVariant::Default,
            tick_ms: 250,
        }
    }
}

/// `<config dir>/hecate/dashboard.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hecate").join("dashboard.yaml"))
}

impl DashboardConfig {
    /// Load configuration: the given file (required) or the default path
    /// (optional), overridden by `HECATE__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("deserialize configuration")?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("parse YAML configuration")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        url::Url::parse(self.api.base_url.trim())
            .with_context(|| format!("api.base_url is not a valid URL: {}", self.api.base_url))?;
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            bail!("api.connect_timeout_secs must be greater than zero");
        }
        if self.ui.tick_ms == 0 {
            bail!("ui.tick_ms must be greater than zero");
        }

        let mut seen = HashSet::new();
        for cluster in &self.clusters {
            if cluster.id.trim().is_empty() {
                bail!("cluster id must not be empty (cluster '{}')", cluster.name);
            }
            if !seen.insert(cluster.id.as_str()) {
                bail!("duplicate cluster id: {}", cluster.id);
            }
            if !(0.0..=1.0).contains(&cluster.health) {
                bail!(
                    "cluster {} health must be within 0.0..=1.0, got {}",
                    cluster.id,
                    cluster.health
                );
            }
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.trim().to_string(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecate_client::ClusterStatus;

    const SAMPLE: &str = r#"
api:
  base_url: "https://tasks.hecate.local"
  token: "abc"
ui:
  form_variant: fullscreen
clusters:
  - id: cl-1
    name: crossroads-west
    status: active
    node_count: 3
    health: 0.9
    last_activity: "2026-03-01T12:00:00Z"
    tags: [prod]
"#;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ui.form_variant, FormVariant::Default);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert!(config.clusters.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_fills_missing_fields() {
        let config = DashboardConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.api.base_url, "https://tasks.hecate.local");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.token.as_deref(), Some("abc"));
        assert_eq!(config.ui.form_variant, FormVariant::Fullscreen);
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.clusters.len(), 1);
        assert_eq!(config.clusters[0].status, ClusterStatus::Active);
        assert!(config.clusters[0].last_activity.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_clusters() {
        let mut config = DashboardConfig::from_yaml(SAMPLE).unwrap();
        let duplicate = config.clusters[0].clone();
        config.clusters.push(duplicate);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate cluster id"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.ui.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip_keeps_variant() {
        let mut config = DashboardConfig::default();
        config.ui.form_variant = FormVariant::Embedded;
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("form_variant: embedded"));
        let parsed = DashboardConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.ui.form_variant, FormVariant::Embedded);
    }

    #[test]
    fn test_client_config_uses_timeouts() {
        let mut config = DashboardConfig::default();
        config.api.timeout_secs = 5;
        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
    }
}
