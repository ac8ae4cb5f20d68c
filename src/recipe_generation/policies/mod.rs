mod base_packages;
mod conda_naming;

pub use base_packages::{BasePackagePolicy, R_BASE_PACKAGE_NAMES};
pub use conda_naming::{CondaNaming, HOST_RUNTIME};
