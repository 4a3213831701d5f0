//! Selector-prefix configuration
//!
//! The prefix can come from four places; first match wins:
//! 1. the `--prefix` flag
//! 2. the `DASH_PREFIX` environment variable
//! 3. a `dash.yaml` file in the target directory
//! 4. the built-in default

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default selector prefix
pub const DEFAULT_PREFIX: &str = "dsh";

/// Environment variable overriding the configured prefix
pub const PREFIX_ENV: &str = "DASH_PREFIX";

/// Per-project configuration file name
pub const CONFIG_FILE: &str = "dash.yaml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashConfig {
    /// Prefix joined in front of every generated component selector
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl DashConfig {
    /// Load the configuration for a target directory
    pub fn load(dir: &Path, flag_prefix: Option<&str>) -> Result<Self> {
        Self::resolve(flag_prefix, std::env::var(PREFIX_ENV).ok(), dir)
    }

    fn resolve(flag: Option<&str>, env: Option<String>, dir: &Path) -> Result<Self> {
        if let Some(prefix) = flag {
            return Ok(Self {
                prefix: prefix.to_string(),
            });
        }

        if let Some(prefix) = env.filter(|p| !p.trim().is_empty()) {
            return Ok(Self { prefix });
        }

        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: DashConfig = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            return Ok(config);
        }

        Ok(Self::default())
    }
}
