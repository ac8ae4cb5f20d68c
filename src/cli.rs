use clap::Parser;
use std::path::PathBuf;

/// Generate conda recipes for R packages published on CRAN
#[derive(Parser, Debug)]
#[command(name = "cran-skeleton")]
#[command(version)]
#[command(about = "Generate conda recipes for R packages published on CRAN", long_about = None)]
pub struct Args {
    /// CRAN package names to generate recipes for
    #[arg(required = true, value_name = "PACKAGES")]
    pub packages: Vec<String>,

    /// Repository to read PACKAGES from: an http(s) URL, a file:// URL or a directory
    /// [default: https://cran.r-project.org/src/contrib/]
    #[arg(long, value_name = "URL")]
    pub cran_url: Option<String>,

    /// Directory to write recipes into [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Version of the package to use (not supported yet)
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Path to a config file (defaults to ./cran-skeleton.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
