use crate::core::package::{Layer, PackageInfo};
use crate::graph::ImportGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Only utility packages may import utilities.
    UtilityImported,
    /// Common packages may only import common and external packages.
    CommonImportsService,
    /// A service may only import its own sub-packages.
    CrossService,
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub importer: PackageInfo,
    pub imported: PackageInfo,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn reason(&self) -> &'static str {
        match self.kind {
            ViolationKind::UtilityImported => "no package can import utilities",
            ViolationKind::CommonImportsService => "common packages cannot import services",
            ViolationKind::CrossService => "packages belong to different services",
        }
    }
}

/// Layering decision table, first match wins:
/// external importers and external imports are always allowed;
/// utility may import anything but be imported by nothing;
/// common may be imported by anyone but only imports common;
/// services may only import their own sub-packages.
pub fn can_import(importer: &PackageInfo, imported: &PackageInfo) -> bool {
    check_import(importer, imported).is_none()
}

fn check_import(importer: &PackageInfo, imported: &PackageInfo) -> Option<ViolationKind> {
    if importer.layer() == Layer::External {
        return None;
    }
    if imported.layer() == Layer::External {
        return None;
    }
    if importer.layer() == Layer::Utility {
        return None;
    }
    if imported.layer() == Layer::Utility {
        return Some(ViolationKind::UtilityImported);
    }
    if imported.layer() == Layer::Common {
        return None;
    }
    if importer.layer() == Layer::Common {
        return Some(ViolationKind::CommonImportsService);
    }
    if importer.path() != imported.path() {
        return Some(ViolationKind::CrossService);
    }
    None
}

/// Collect every disallowed import edge. All violations are reported
/// together; validation never stops at the first one.
pub fn validate(graph: &ImportGraph) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (importer, imports) in &graph.edges {
        for imported in imports {
            if let Some(kind) = check_import(importer, imported) {
                violations.push(Violation {
                    importer: importer.clone(),
                    imported: imported.clone(),
                    kind,
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use crate::core::package::{Layer, PackageInfo};
    use crate::graph::rules::{can_import, validate, ViolationKind};
    use crate::graph::{Edges, ImportGraph};

    fn pkg(path: &str, name: &str, layer: Layer) -> PackageInfo {
        PackageInfo::new(path, name, layer)
    }

    fn external() -> PackageInfo {
        pkg("github.com/lib/pq", "github.com/lib/pq", Layer::External)
    }

    fn utility() -> PackageInfo {
        pkg("example.com/app/utils", "utils", Layer::Utility)
    }

    fn common() -> PackageInfo {
        pkg("example.com/app/common", "common", Layer::Common)
    }

    fn service(name: &str) -> PackageInfo {
        pkg(
            &format!("example.com/app/services/{name}"),
            name,
            Layer::Service,
        )
    }

    #[test]
    fn external_may_import_and_be_imported() {
        assert!(can_import(&external(), &utility()));
        assert!(can_import(&service("foo"), &external()));
        assert!(can_import(&common(), &external()));
    }

    #[test]
    fn utility_may_import_anything() {
        assert!(can_import(&utility(), &service("foo")));
        assert!(can_import(&utility(), &common()));
        assert!(can_import(&utility(), &utility()));
    }

    #[test]
    fn nothing_else_may_import_utility() {
        assert!(!can_import(&service("foo"), &utility()));
        assert!(!can_import(&common(), &utility()));
    }

    #[test]
    fn common_is_importable_but_imports_no_services() {
        assert!(can_import(&service("foo"), &common()));
        assert!(can_import(&common(), &common()));
        assert!(!can_import(&common(), &service("foo")));
    }

    #[test]
    fn services_are_isolated_from_each_other() {
        assert!(!can_import(&service("foo"), &service("bar")));
        // sub-packages classify to the same unit, so same-path is allowed
        assert!(can_import(&service("foo"), &service("foo")));
    }

    #[test]
    fn validate_collects_every_violation() {
        let foo = service("foo");
        let bar = service("bar");
        let mut edges = Edges::new();
        edges.insert(
            foo.clone(),
            [bar.clone(), common(), utility()].into_iter().collect(),
        );
        edges.insert(common(), [foo.clone()].into_iter().collect());
        edges.insert(bar, Default::default());

        let violations = validate(&ImportGraph { edges });

        assert_eq!(violations.len(), 3);
        assert!(violations.iter().any(|violation| {
            violation.kind == ViolationKind::CrossService && violation.importer == foo
        }));
        assert!(violations
            .iter()
            .any(|violation| violation.kind == ViolationKind::UtilityImported));
        assert!(violations
            .iter()
            .any(|violation| violation.kind == ViolationKind::CommonImportsService));
    }
}
