use crate::config::Config;
use crate::core::package::{Layer, PackageInfo};
use crate::util::output;

/// Maps raw package paths to classified package identities. Built
/// once from the project config; classification is pure after that.
#[derive(Debug, Clone)]
pub struct Classifier {
    base: String,
    root_dir: String,
    external: Vec<String>,
    utility: Vec<String>,
    common: Vec<String>,
    service: Vec<String>,
}

impl Classifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base: config.module_name.clone(),
            root_dir: config.root_dir.clone(),
            external: config.folders.external.clone(),
            utility: config.folders.utility.clone(),
            common: config.folders.common.clone(),
            service: config.folders.service.clone(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    /// Classify a package path into its layer and friendly name.
    ///
    /// Paths outside the module base are external. Pattern lists are
    /// tried in fixed priority order (utility, external, common,
    /// service); the first matching pattern wins, so a package nested
    /// under both a utility and a common root resolves as utility. No
    /// match defaults to external.
    pub fn classify(&self, pkg_path: &str) -> PackageInfo {
        if !pkg_path.starts_with(&self.base) {
            return PackageInfo::new(pkg_path, pkg_path, Layer::External);
        }

        let lists = [
            (Layer::Utility, &self.utility),
            (Layer::External, &self.external),
            (Layer::Common, &self.common),
            (Layer::Service, &self.service),
        ];

        for (layer, patterns) in lists {
            for pattern in patterns {
                if let Some(info) = self.match_pattern(pkg_path, pattern, layer) {
                    return info;
                }
            }
        }

        PackageInfo::new(pkg_path, pkg_path, Layer::External)
    }

    fn match_pattern(&self, pkg_path: &str, pattern: &str, layer: Layer) -> Option<PackageInfo> {
        let mut prefix = format!("{}/{}", self.base, pattern);
        let wildcard = prefix.ends_with('*');
        if wildcard {
            prefix.truncate(prefix.len() - 1);
        }

        if !pkg_path.starts_with(&prefix) {
            return None;
        }

        let info = if wildcard {
            // one path segment beneath the prefix names the unit
            let segment = pkg_path[prefix.len()..]
                .split('/')
                .next()
                .unwrap_or_default();
            PackageInfo::new(format!("{prefix}{segment}"), segment, layer)
        } else {
            PackageInfo::new(prefix, pattern, layer)
        };

        output::debug(&format!(
            "found {info} matching {pkg_path} against {pattern} with base {}",
            self.base
        ));
        Some(info)
    }
}
