use std::collections::HashSet;

use crate::core::classify::Classifier;
use crate::core::package::Layer;
use crate::error::Result;
use crate::graph::ImportGraph;
use crate::loader::PackageLoader;
use crate::util::output;

/// Build the import graph of every package reachable from `selector`.
///
/// External-classified packages never become nodes and external
/// imports never become edges. Every retained package gets an entry
/// even when none of its imports survive the filter; duplicate edges
/// and self-imports collapse under set semantics.
pub fn build_import_graph(
    loader: &dyn PackageLoader,
    selector: &str,
    classifier: &Classifier,
) -> Result<ImportGraph> {
    output::debug(&format!("building import graph from {selector}"));

    let mut graph = ImportGraph::new();

    for pkg in loader.load(selector)? {
        let info = classifier.classify(&pkg.path);
        if info.layer() == Layer::External {
            continue;
        }
        if !graph.edges.contains_key(&info) {
            output::debug(&format!("found package {info}"));
        }
        let entry = graph.edges.entry(info.clone()).or_insert_with(HashSet::new);

        for import in &pkg.imports {
            let import_info = classifier.classify(import);
            if import_info.layer() == Layer::External {
                continue;
            }
            if !entry.contains(&import_info) {
                output::debug(&format!("package {info} imports {import_info}"));
            }
            entry.insert(import_info);
        }
    }

    Ok(graph)
}
