mod cli;

use cli::Args;
use cran_skeleton::adapters::outbound::console::StderrProgressReporter;
use cran_skeleton::adapters::outbound::filesystem::FileSystemRecipeWriter;
use cran_skeleton::application::dto::RecipeRequest;
use cran_skeleton::application::factories::{IndexFetcherFactory, RecipeFormatterFactory};
use cran_skeleton::application::use_cases::GenerateRecipesUseCase;
use cran_skeleton::config::{self, ConfigFile, Settings};
use cran_skeleton::shared::error::ExitCode;
use cran_skeleton::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with status 2 on invalid arguments)
    let args = Args::parse_args();

    // Load config: explicit path, or auto-discovered in the current directory
    let config = load_config(&args)?;
    let settings = Settings::merge(args.cran_url, args.output_dir, config);

    // Fail before touching the network if there is nowhere to write
    FileSystemRecipeWriter::validate_output_dir(&settings.output_dir)?;

    // Create adapters (Dependency Injection)
    let index_fetcher = IndexFetcherFactory::create(&settings.cran_url)?;
    let recipe_writer = FileSystemRecipeWriter::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateRecipesUseCase::new(
        index_fetcher,
        recipe_writer,
        progress_reporter,
        RecipeFormatterFactory::all(),
    );

    let request = RecipeRequest::new(
        settings.cran_url,
        settings.output_dir,
        args.packages,
        args.package_version,
    );

    let response = use_case.execute(request)?;

    for recipe in &response.recipes {
        println!("{}", recipe.path.display());
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}
