use std::io::Cursor;

use depcheck::config::{Config, FoldersConfig};
use depcheck::core::{collect_changed_packages, Classifier, Layer, PackageInfo, PackageSet};
use depcheck::graph::builder::build_import_graph;
use depcheck::graph::ops::expand_dependencies;
use depcheck::loader::StubLoader;

fn config() -> Config {
    Config {
        module_name: "example.com/app".to_string(),
        root_dir: "app/".to_string(),
        folders: FoldersConfig {
            external: Vec::new(),
            utility: vec!["utils".to_string()],
            common: vec!["common".to_string()],
            service: vec!["services/*".to_string()],
        },
    }
}

fn loader() -> StubLoader {
    StubLoader::new(vec![
        ("example.com/app/common", vec!["fmt"]),
        (
            "example.com/app/services/foo",
            vec!["example.com/app/common"],
        ),
        (
            "example.com/app/services/bar",
            vec!["example.com/app/services/foo"],
        ),
        (
            "example.com/app/utils/migrate",
            vec!["example.com/app/common"],
        ),
    ])
}

fn expanded_set_for(input: &str) -> PackageSet {
    let config = config();
    config.validate().expect("config is valid");
    let classifier = Classifier::from_config(&config);

    let mut changed =
        collect_changed_packages(Cursor::new(input.to_string()), &classifier).expect("collect");

    let imports = build_import_graph(&loader(), "./...", &classifier).expect("build graph");
    let dependencies = imports.to_dependency_graph();
    expand_dependencies(&dependencies, &mut changed);
    changed
}

#[test]
fn service_change_expands_to_its_dependents() {
    let changed = expanded_set_for("app/services/foo/handler.go\n");

    let names: Vec<&str> = changed.iter().map(|pkg| pkg.name()).collect();
    assert_eq!(changed.len(), 2);
    assert!(names.contains(&"foo"));
    assert!(names.contains(&"bar"));

    let mut services: Vec<&str> = changed
        .iter()
        .filter(|pkg| pkg.layer() == Layer::Service)
        .map(|pkg| pkg.name())
        .collect();
    services.sort_unstable();
    assert_eq!(services.join(" "), "bar foo");
}

#[test]
fn common_change_impacts_everything_that_relies_on_it() {
    let changed = expanded_set_for("app/common/logger.go\n");

    let names: Vec<&str> = changed.iter().map(|pkg| pkg.name()).collect();
    assert_eq!(changed.len(), 4);
    for name in ["common", "foo", "bar", "utils"] {
        assert!(names.contains(&name), "expected {name} in {names:?}");
    }
}

#[test]
fn manifest_change_yields_root_then_every_package() {
    let config = config();
    let classifier = Classifier::from_config(&config);

    let changed = collect_changed_packages(Cursor::new("app/go.mod\n".to_string()), &classifier)
        .expect("collect");
    assert_eq!(changed, PackageSet::from([PackageInfo::root()]));
    assert_eq!(PackageInfo::root().selector(), "./...");

    let mut changed = changed;
    let imports = build_import_graph(&loader(), "./...", &classifier).expect("build graph");
    expand_dependencies(&imports.to_dependency_graph(), &mut changed);
    assert_eq!(changed.len(), 4);
}

#[test]
fn unrelated_files_produce_no_impact() {
    let changed = expanded_set_for("docs/changelog.md\napp/README.md\n");
    assert!(changed.is_empty());
}
