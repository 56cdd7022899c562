use std::collections::{HashMap, HashSet};

use crate::core::package::PackageInfo;

pub mod builder;
pub mod ops;
pub mod rules;

pub type Edges = HashMap<PackageInfo, HashSet<PackageInfo>>;

/// Edge A -> B means "A imports B".
#[derive(Debug, Default)]
pub struct ImportGraph {
    pub edges: Edges,
}

/// Edge A -> B means "B depends on A"; produced by transposing an
/// import graph. Looking up a package yields its direct dependents.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    pub edges: Edges,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_dependency_graph(&self) -> DependencyGraph {
        DependencyGraph {
            edges: ops::transpose(&self.edges),
        }
    }

    pub fn render(&self) -> String {
        render_edges(&self.edges)
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_import_graph(&self) -> ImportGraph {
        ImportGraph {
            edges: ops::transpose(&self.edges),
        }
    }

    pub fn render(&self) -> String {
        render_edges(&self.edges)
    }
}

fn render_edges(edges: &Edges) -> String {
    let mut res = String::new();
    for (pkg, targets) in edges {
        res.push_str(&format!("{pkg}:\n"));
        for target in targets {
            res.push_str(&format!("\t{target}\n"));
        }
    }
    res
}
