use std::io::BufRead;

use crate::core::classify::Classifier;
use crate::core::package::{PackageInfo, PackageSet};
use crate::error::Result;
use crate::util::output;

/// Manifest files whose change conservatively impacts every package.
const MANIFEST_FILES: [&str; 2] = ["go.mod", "go.sum"];

/// Turn a stream of repository-relative changed-file paths into the
/// initial set of changed packages.
///
/// Lines outside the configured repository root are ignored. A change
/// to the module manifest or its lock file short-circuits to the root
/// sentinel alone; expansion will then cover the whole module. Files
/// living directly at the repository root belong to no package and
/// are skipped.
pub fn collect_changed_packages(
    reader: impl BufRead,
    classifier: &Classifier,
) -> Result<PackageSet> {
    let mut res = PackageSet::new();

    for line in reader.lines() {
        let changed_file = line?;
        let changed_file = changed_file.trim();
        if changed_file.is_empty() {
            continue;
        }

        let Some(rel) = changed_file.strip_prefix(classifier.root_dir()) else {
            continue;
        };
        let rel = rel.trim_start_matches('/');

        if MANIFEST_FILES.contains(&rel) {
            output::debug(&format!("manifest file {changed_file} changed"));
            res.clear();
            res.insert(PackageInfo::root());
            return Ok(res);
        }

        let changed_path = format!("{}/{}", classifier.base(), rel);

        if parent_dir(&changed_path) == classifier.base() {
            output::debug(&format!("skipping root directory file {rel}"));
            continue;
        }

        let info = classifier.classify(&changed_path);

        if !res.contains(&info) {
            output::debug(&format!("found changed package {info}"));
        }
        res.insert(info);
    }

    Ok(res)
}

fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => path,
    }
}
