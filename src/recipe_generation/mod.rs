/// Domain layer for CRAN to conda recipe conversion
///
/// Pure parsing and translation logic with no I/O: index splitting and
/// record parsing, dependency grammar, dependency resolution and recipe
/// field assembly.
pub mod domain;
pub mod policies;
pub mod services;
