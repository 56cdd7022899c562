use serde::Deserialize;

use crate::config::{ConfigError, Result};

/// Project configuration, loaded from `depcheck.yaml` at the module
/// root. The folder lists hold path prefixes relative to the module
/// base; a trailing `*` matches one path segment as a named unit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Module base prefix, e.g. `example.com/app`.
    pub module_name: String,
    /// Prefix changed-file paths carry relative to the repository,
    /// e.g. `app/`. Lines outside it are ignored.
    #[serde(default)]
    pub root_dir: String,
    #[serde(default)]
    pub folders: FoldersConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoldersConfig {
    #[serde(default)]
    pub external: Vec<String>,
    #[serde(default)]
    pub utility: Vec<String>,
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub service: Vec<String>,
}

impl Config {
    /// Checked before any graph work so malformed configuration
    /// fails fast.
    pub fn validate(&self) -> Result<()> {
        if self.module_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "module_name must not be empty".to_string(),
            ));
        }

        for (list, patterns) in [
            ("external", &self.folders.external),
            ("utility", &self.folders.utility),
            ("common", &self.folders.common),
            ("service", &self.folders.service),
        ] {
            for pattern in patterns {
                if pattern.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "folders.{list} contains an empty pattern"
                    )));
                }
                // wildcards are only meaningful as a trailing segment
                if let Some(pos) = pattern.find('*') {
                    if pos != pattern.len() - 1 {
                        return Err(ConfigError::Invalid(format!(
                            "folders.{list} pattern {pattern:?} has a non-trailing wildcard"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
