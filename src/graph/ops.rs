use std::collections::{HashSet, VecDeque};

use crate::core::package::{PackageInfo, PackageSet};
use crate::graph::{DependencyGraph, Edges};
use crate::util::output;

/// Reverse every edge. Every node appearing in the source, as a key
/// or as an edge endpoint, is keyed in the result; isolated nodes
/// keep an empty edge set. Dropping them would break closure
/// expansion over the transposed graph.
pub fn transpose(edges: &Edges) -> Edges {
    let mut res = Edges::new();
    for (pkg, targets) in edges {
        res.entry(pkg.clone()).or_insert_with(HashSet::new);
        for target in targets {
            res.entry(target.clone())
                .or_insert_with(HashSet::new)
                .insert(pkg.clone());
        }
    }
    res
}

/// Grow `set` in place to every package transitively impacted by it.
///
/// A root sentinel in the set means the manifest changed: the set is
/// replaced with every package in the module and no traversal runs.
/// Otherwise this is forward reachability over the dependency graph,
/// implemented as a worklist. Packages with no entry in the graph
/// have no known dependents; they contribute nothing but stay in the
/// set.
pub fn expand_dependencies(graph: &DependencyGraph, set: &mut PackageSet) {
    output::debug("expanding dependency graph");

    if set.contains(&PackageInfo::root()) {
        output::debug("root package changed, every package is impacted");
        set.clear();
        set.extend(graph.edges.keys().cloned());
        return;
    }

    let mut queue: VecDeque<PackageInfo> = set.iter().cloned().collect();

    while let Some(pkg) = queue.pop_front() {
        let Some(dependents) = graph.edges.get(&pkg) else {
            output::debug(&format!("package {pkg} has no dependents, skipping it"));
            continue;
        };

        for dependent in dependents {
            if set.insert(dependent.clone()) {
                output::debug(&format!(
                    "package {dependent} depends on {pkg}, expanding set"
                ));
                queue.push_back(dependent.clone());
            }
        }
    }
}
