use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};

pub const CONFIG_FILE: &str = "depcheck.yaml";

/// Locate the config file: an explicit `--config` path wins, then the
/// `DEPCHECK_CONFIG` environment variable, then the nearest
/// `depcheck.yaml` walking up from `start`.
pub fn resolve_config(
    start: impl AsRef<Path>,
    config_path: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::ConfigFileMissing(path));
        }
        return Ok(path);
    }

    if let Ok(path) = env::var("DEPCHECK_CONFIG") {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(ConfigError::ConfigFileMissing(path));
        }
        return Ok(path);
    }

    for ancestor in start.as_ref().ancestors() {
        let candidate = ancestor.join(CONFIG_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::ConfigNotFound)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigFileMissing(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::config::resolve::{load_config, resolve_config, CONFIG_FILE};

    fn unique_temp_dir(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        let pid = std::process::id();
        std::env::temp_dir().join(format!("depcheck-{prefix}-{pid}-{nanos}"))
    }

    #[test]
    fn resolves_config_from_ancestor() {
        let root = unique_temp_dir("resolve");
        let nested = root.join("services").join("foo");
        fs::create_dir_all(&nested).expect("create nested dirs");
        fs::write(
            root.join(CONFIG_FILE),
            "module_name: example.com/app\nroot_dir: app/\n",
        )
        .expect("write config");

        let found = resolve_config(&nested, None).expect("resolve config");
        assert_eq!(found, root.join(CONFIG_FILE));

        let config = load_config(&found).expect("load config");
        assert_eq!(config.module_name, "example.com/app");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn invalid_config_fails_on_load() {
        let root = unique_temp_dir("resolve-invalid");
        fs::create_dir_all(&root).expect("create root");
        let path = root.join(CONFIG_FILE);
        fs::write(&path, "module_name: \"\"\n").expect("write config");

        assert!(load_config(&path).is_err());

        let _ = fs::remove_dir_all(root);
    }
}
