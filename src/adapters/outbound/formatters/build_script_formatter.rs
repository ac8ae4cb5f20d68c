use crate::ports::outbound::RecipeFormatter;
use crate::recipe_generation::domain::RecipeFields;

/// POSIX build script run by conda-build on Linux and macOS
const BUILD_SH: &str = r#"#!/bin/bash

# R refuses to build packages that mark themselves as Priority: Recommended
mv DESCRIPTION DESCRIPTION.old
grep -v '^Priority: ' DESCRIPTION.old > DESCRIPTION

# On OS X, the only way to build packages currently is by having
# DYLD_LIBRARY_PATH set.
export DYLD_LIBRARY_PATH=$PREFIX/lib

R CMD INSTALL --build .

# Add more build steps here, if they are necessary.

# See
# https://docs.conda.io/projects/conda-build/
# for a list of environment variables that are set during the build process.
"#;

/// Batch build script run by conda-build on Windows
const BLD_BAT: &str = r#"R CMD INSTALL --build .
if errorlevel 1 exit 1

@rem Add more build steps here, if they are necessary.

@rem See
@rem https://docs.conda.io/projects/conda-build/
@rem for a list of environment variables that are set during the build process.
"#;

/// BuildShFormatter adapter for the recipe's `build.sh`
pub struct BuildShFormatter;

impl BuildShFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildShFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormatter for BuildShFormatter {
    fn file_name(&self) -> &'static str {
        "build.sh"
    }

    fn render(&self, _fields: &RecipeFields) -> String {
        BUILD_SH.to_string()
    }
}

/// BldBatFormatter adapter for the recipe's `bld.bat`
pub struct BldBatFormatter;

impl BldBatFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BldBatFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormatter for BldBatFormatter {
    fn file_name(&self) -> &'static str {
        "bld.bat"
    }

    fn render(&self, _fields: &RecipeFields) -> String {
        BLD_BAT.to_string()
    }
}
