use crate::error::Result;

pub mod golist;

pub use golist::GoListLoader;

/// A package with its direct (non-transitive) import identifiers, as
/// reported by the loader.
#[derive(Debug, Clone)]
pub struct LoadedPackage {
    pub path: String,
    pub imports: Vec<String>,
}

/// Enumerates every package reachable from a selector. The single
/// production implementation shells out to the Go toolchain; tests
/// substitute an in-memory loader.
pub trait PackageLoader {
    fn load(&self, selector: &str) -> Result<Vec<LoadedPackage>>;
}

/// In-memory loader backed by a fixed package listing.
#[derive(Debug, Default)]
pub struct StubLoader {
    packages: Vec<LoadedPackage>,
}

impl StubLoader {
    pub fn new(packages: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|(path, imports)| LoadedPackage {
                    path: path.to_string(),
                    imports: imports.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }
}

impl PackageLoader for StubLoader {
    fn load(&self, _selector: &str) -> Result<Vec<LoadedPackage>> {
        Ok(self.packages.clone())
    }
}
