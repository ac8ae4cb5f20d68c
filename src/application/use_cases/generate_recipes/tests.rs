use super::*;
use crate::application::factories::RecipeFormatterFactory;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

const INDEX: &str = "Package: foo
Version: 1.0-1
Depends: R (>= 3.0.0), stats
Title: Foo Tools
License: GPL-2

Package: bar
Version: 2.1
Imports: foo, Rcpp (>= 0.12)
LinkingTo: Rcpp (>= 0.12)
Suggests: testthat
Encoding: UTF-8

Package: broken
Version: 0.1
Depends: baz [linux]
";

struct MockIndexFetcher {
    content: String,
}

impl IndexFetcher for MockIndexFetcher {
    fn fetch_index(&self, _cran_url: &str) -> Result<String> {
        Ok(self.content.clone())
    }
}

struct FailingIndexFetcher;

impl IndexFetcher for FailingIndexFetcher {
    fn fetch_index(&self, cran_url: &str) -> Result<String> {
        Err(SkeletonError::IndexFetchError {
            url: format!("{}PACKAGES", cran_url),
            details: "connection refused".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct MockRecipeWriter {
    written: RefCell<Vec<(String, Vec<RecipeFile>)>>,
}

impl RecipeWriter for &MockRecipeWriter {
    fn write_recipe(
        &self,
        output_dir: &Path,
        recipe_name: &str,
        files: &[RecipeFile],
    ) -> Result<PathBuf> {
        self.written
            .borrow_mut()
            .push((recipe_name.to_string(), files.to_vec()));
        Ok(output_dir.join(recipe_name))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    warnings: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn request(packages: &[&str]) -> RecipeRequest {
    RecipeRequest::new(
        "https://cran.example.org/src/contrib",
        PathBuf::from("/out"),
        packages.iter().map(|p| p.to_string()).collect(),
        None,
    )
}

fn file<'a>(files: &'a [RecipeFile], name: &str) -> &'a str {
    &files.iter().find(|f| f.name == name).unwrap().content
}

#[test]
fn test_execute_writes_recipe_with_filtered_dependencies() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let response = use_case.execute(request(&["foo"])).unwrap();

    assert_eq!(response.recipes.len(), 1);
    assert_eq!(response.recipes[0].package_name, "r-foo");
    assert_eq!(response.recipes[0].conda_version, "1.0_1");
    assert_eq!(response.recipes[0].path, PathBuf::from("/out/r-foo"));

    let written = writer.written.borrow();
    let (name, files) = &written[0];
    assert_eq!(name, "r-foo");
    assert_eq!(files.len(), 3);

    let meta = file(files, "meta.yaml");
    assert!(meta.contains("  build:\n    - r >=3.0.0\n\n  run:\n    - r >=3.0.0\n"));
    assert!(!meta.contains("r-stats"));
    assert!(meta.contains("version: \"1.0_1\""));
    assert!(meta.contains("url: https://cran.example.org/src/contrib/foo_1.0-1.tar.gz"));
}

#[test]
fn test_execute_merges_dependency_fields() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    use_case.execute(request(&["bar"])).unwrap();

    let written = writer.written.borrow();
    let meta = file(&written[0].1, "meta.yaml");
    assert!(meta.contains("  build:\n    - r-rcpp >=0.12\n    - r-foo\n"));
    assert!(meta.contains("# Suggests: testthat\n"));
}

#[test]
fn test_execute_preserves_request_order() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let response = use_case.execute(request(&["bar", "foo"])).unwrap();

    let names: Vec<&str> = response
        .recipes
        .iter()
        .map(|r| r.package_name.as_str())
        .collect();
    assert_eq!(names, vec!["r-bar", "r-foo"]);
}

#[test]
fn test_execute_unknown_package_writes_nothing() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let err = use_case.execute(request(&["doesnotexist"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SkeletonError>(),
        Some(SkeletonError::UnknownPackage { package }) if package == "doesnotexist"
    ));
    assert!(writer.written.borrow().is_empty());
}

#[test]
fn test_execute_keeps_earlier_recipes_on_failure() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let err = use_case.execute(request(&["foo", "broken"])).unwrap_err();

    match err.downcast_ref::<SkeletonError>() {
        Some(SkeletonError::UnsupportedDependencySyntax { package, token, .. }) => {
            assert_eq!(package, "broken");
            assert_eq!(token, "baz [linux]");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(writer.written.borrow().len(), 1);
}

#[test]
fn test_execute_rejects_package_version() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        FailingIndexFetcher,
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let mut req = request(&["foo"]);
    req.package_version = Some("1.0-1".to_string());
    let err = use_case.execute(req).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SkeletonError>(),
        Some(SkeletonError::UnsupportedFeature { .. })
    ));
}

#[test]
fn test_execute_rejects_empty_request() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: INDEX.to_string(),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    assert!(use_case.execute(request(&[])).is_err());
}

#[test]
fn test_execute_propagates_fetch_failure() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        FailingIndexFetcher,
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let err = use_case.execute(request(&["foo"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SkeletonError>(),
        Some(SkeletonError::IndexFetchError { url, .. })
            if url == "https://cran.example.org/src/contrib/PACKAGES"
    ));
}

#[test]
fn test_execute_warns_on_unknown_fields_and_duplicates() {
    let writer = MockRecipeWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case = GenerateRecipesUseCase::new(
        MockIndexFetcher {
            content: format!("{}\nPackage: qux\nVersion: 1\nX-Custom: a\n", INDEX),
        },
        &writer,
        &reporter,
        RecipeFormatterFactory::all(),
    );

    let response = use_case.execute(request(&["foo", "FOO"])).unwrap();

    assert_eq!(response.recipes.len(), 1);
    assert_eq!(writer.written.borrow().len(), 1);

    let warnings = reporter.warnings.borrow();
    assert!(warnings
        .iter()
        .any(|w| w.contains("Unknown field 'X-Custom'")));
    assert!(warnings
        .iter()
        .any(|w| w.contains("'FOO' requested more than once")));
}
