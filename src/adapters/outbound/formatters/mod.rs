/// Formatter adapters for the files of a conda recipe
mod build_script_formatter;
mod meta_yaml_formatter;

pub use build_script_formatter::{BldBatFormatter, BuildShFormatter};
pub use meta_yaml_formatter::MetaYamlFormatter;
