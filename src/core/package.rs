use std::collections::HashSet;
use std::fmt;

/// Architectural layer a package belongs to. Layers constrain which
/// import directions are allowed, see [`crate::graph::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Dependencies outside the module; unconstrained.
    External,
    /// Shared code; may only import external packages.
    Common,
    /// Deployable services; may import common and external packages.
    Service,
    /// Tooling; may import anything, may be imported by nothing.
    Utility,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::External => "external",
            Layer::Common => "common",
            Layer::Service => "service",
            Layer::Utility => "utility",
        };
        write!(f, "{name}")
    }
}

/// Immutable package identity. Two raw package paths may classify to
/// the same `PackageInfo` when a wildcard pattern groups them under
/// one named unit; equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageInfo {
    path: String,
    name: String,
    layer: Layer,
}

impl PackageInfo {
    pub fn new(path: impl Into<String>, name: impl Into<String>, layer: Layer) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            layer,
        }
    }

    /// Sentinel for the module root. Its presence in a change set
    /// means the build manifest changed and every package is impacted.
    pub fn root() -> Self {
        Self {
            path: ".".to_string(),
            name: "project root".to_string(),
            layer: Layer::Common,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Package selector covering the package and its sub-packages,
    /// suitable for `go test` and friends.
    pub fn selector(&self) -> String {
        format!("{}/...", self.path)
    }
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.layer)
    }
}

pub type PackageSet = HashSet<PackageInfo>;
