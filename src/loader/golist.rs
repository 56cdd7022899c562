use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use crate::error::{DepcheckError, Result};
use crate::loader::{LoadedPackage, PackageLoader};

/// Loads packages by running `go list -json` for the selector and
/// reading the stream of package objects it prints.
#[derive(Debug, Default)]
pub struct GoListLoader {
    dir: Option<PathBuf>,
}

impl GoListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

// `go list -json` prints concatenated JSON objects, one per package.
#[derive(Debug, Deserialize)]
struct GoListPackage {
    #[serde(rename = "ImportPath")]
    import_path: String,
    #[serde(rename = "Imports", default)]
    imports: Vec<String>,
}

impl PackageLoader for GoListLoader {
    fn load(&self, selector: &str) -> Result<Vec<LoadedPackage>> {
        let mut cmd = Command::new("go");
        cmd.args(["list", "-json"]).arg(selector);
        if let Some(dir) = self.dir.as_ref() {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|err| DepcheckError::Load(anyhow::Error::new(err)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DepcheckError::Load(anyhow::anyhow!(format!(
                "go list {} failed: {}",
                selector,
                stderr.trim()
            ))));
        }

        let mut packages = Vec::new();
        for parsed in serde_json::Deserializer::from_slice(&output.stdout).into_iter::<GoListPackage>() {
            let pkg = parsed.map_err(|err| DepcheckError::Load(anyhow::Error::new(err)))?;
            packages.push(LoadedPackage {
                path: pkg.import_path,
                imports: pkg.imports,
            });
        }

        Ok(packages)
    }
}
