use std::fmt;

/// Field names that appear in a CRAN `PACKAGES` index
///
/// The vocabulary is known to be incomplete, so unrecognized keys are kept
/// verbatim in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CranField {
    Site,
    Archs,
    Depends,
    Enhances,
    Imports,
    License,
    LicenseIsFoss,
    LicenseRestrictsUse,
    LinkingTo,
    Md5sum,
    NeedsCompilation,
    OsType,
    Package,
    Path,
    Priority,
    Suggests,
    Version,
    Title,
    Author,
    Maintainer,
    Other(String),
}

impl CranField {
    /// Maps an index key to its field, falling back to `Other`
    pub fn from_key(key: &str) -> Self {
        match key {
            "Site" => CranField::Site,
            "Archs" => CranField::Archs,
            "Depends" => CranField::Depends,
            "Enhances" => CranField::Enhances,
            "Imports" => CranField::Imports,
            "License" => CranField::License,
            "License_is_FOSS" => CranField::LicenseIsFoss,
            "License_restricts_use" => CranField::LicenseRestrictsUse,
            "LinkingTo" => CranField::LinkingTo,
            "MD5sum" => CranField::Md5sum,
            "NeedsCompilation" => CranField::NeedsCompilation,
            "OS_type" => CranField::OsType,
            "Package" => CranField::Package,
            "Path" => CranField::Path,
            "Priority" => CranField::Priority,
            "Suggests" => CranField::Suggests,
            "Version" => CranField::Version,
            "Title" => CranField::Title,
            "Author" => CranField::Author,
            "Maintainer" => CranField::Maintainer,
            other => CranField::Other(other.to_string()),
        }
    }

    /// The key as it is spelled in the index
    pub fn as_str(&self) -> &str {
        match self {
            CranField::Site => "Site",
            CranField::Archs => "Archs",
            CranField::Depends => "Depends",
            CranField::Enhances => "Enhances",
            CranField::Imports => "Imports",
            CranField::License => "License",
            CranField::LicenseIsFoss => "License_is_FOSS",
            CranField::LicenseRestrictsUse => "License_restricts_use",
            CranField::LinkingTo => "LinkingTo",
            CranField::Md5sum => "MD5sum",
            CranField::NeedsCompilation => "NeedsCompilation",
            CranField::OsType => "OS_type",
            CranField::Package => "Package",
            CranField::Path => "Path",
            CranField::Priority => "Priority",
            CranField::Suggests => "Suggests",
            CranField::Version => "Version",
            CranField::Title => "Title",
            CranField::Author => "Author",
            CranField::Maintainer => "Maintainer",
            CranField::Other(key) => key,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CranField::Other(_))
    }
}

impl fmt::Display for CranField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
