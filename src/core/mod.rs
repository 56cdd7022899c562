pub mod changeset;
pub mod classify;
pub mod package;

pub use changeset::collect_changed_packages;
pub use classify::Classifier;
pub use package::{Layer, PackageInfo, PackageSet};
