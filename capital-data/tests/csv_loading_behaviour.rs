//! Behavioural tests for loading the country table from disk.

use camino::Utf8PathBuf;
use capital_core::{CountryQuery, CountryStore, LoadReport, QuizGenerator, SourceError};
use capital_data::load_countries;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::collections::HashSet;

type PathCell = RefCell<Option<Utf8PathBuf>>;
type LoadedCell = RefCell<Option<(CountryStore, LoadReport)>>;

#[fixture]
fn data_path() -> PathCell {
    RefCell::new(None)
}

#[fixture]
fn loaded() -> LoadedCell {
    RefCell::new(None)
}

fn with_loaded<T>(loaded: &LoadedCell, f: impl FnOnce(&CountryStore, &LoadReport) -> T) -> T {
    let loaded = loaded.borrow();
    let (store, report) = loaded.as_ref().expect("file should be loaded first");
    f(store, report)
}

// --- Given steps ---

#[given("the country fixture file")]
fn fixture_file(#[from(data_path)] data_path: &PathCell) {
    *data_path.borrow_mut() =
        Some(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/countries.csv"));
}

#[given("a data file that does not exist")]
fn missing_file(#[from(data_path)] data_path: &PathCell) {
    *data_path.borrow_mut() =
        Some(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/absent.csv"));
}

// --- When steps ---

#[when("the file is loaded")]
fn load_file(#[from(data_path)] data_path: &PathCell, #[from(loaded)] loaded: &LoadedCell) {
    let path = data_path.borrow().clone().expect("a data path should be set");
    *loaded.borrow_mut() = Some(load_countries(&path));
}

// --- Then steps ---

#[then("{count} countries are loaded")]
fn countries_loaded(#[from(loaded)] loaded: &LoadedCell, count: usize) {
    with_loaded(loaded, |store, report| {
        assert_eq!(store.all().len(), count);
        assert_eq!(report.loaded, count);
    });
}

#[then("{count} rows are skipped")]
fn rows_skipped(#[from(loaded)] loaded: &LoadedCell, count: usize) {
    with_loaded(loaded, |_, report| assert_eq!(report.skipped, count));
}

#[then("{count} rows are rejected")]
fn rows_rejected(#[from(loaded)] loaded: &LoadedCell, count: usize) {
    with_loaded(loaded, |_, report| assert_eq!(report.rejections.len(), count));
}

#[then("{count} duplicate rows are collapsed")]
fn duplicates_collapsed(#[from(loaded)] loaded: &LoadedCell, count: usize) {
    with_loaded(loaded, |_, report| assert_eq!(report.duplicates, count));
}

#[then("\"{name}\" has no code and no area")]
fn no_code_or_area(#[from(loaded)] loaded: &LoadedCell, name: String) {
    with_loaded(loaded, |store, _| {
        let country = store.search(&name).expect("country should be loaded");
        assert_eq!(country.code(), None);
        assert_eq!(country.area(), None);
        assert_eq!(country.population(), Some(825));
    });
}

#[then("\"{name}\" lists \"{language}\" as its language")]
fn language_is(#[from(loaded)] loaded: &LoadedCell, name: String, language: String) {
    with_loaded(loaded, |store, _| {
        let country = store.search(&name).expect("country should be loaded");
        assert_eq!(country.language(), Some(language.as_str()));
    });
}

#[then("searching for \"{query}\" finds nothing")]
fn finds_nothing(#[from(loaded)] loaded: &LoadedCell, query: String) {
    with_loaded(loaded, |store, _| assert!(store.search(&query).is_none()));
}

#[then("a generated question offers {count} distinct choices")]
fn question_choices(#[from(loaded)] loaded: &LoadedCell, count: usize) {
    with_loaded(loaded, |store, _| {
        let question = QuizGenerator::new(store)
            .next_question()
            .expect("enough capitals for a question");
        let choices: HashSet<&String> = question.choices().iter().collect();
        assert_eq!(choices.len(), count);
    });
}

#[then("the source is reported as unavailable")]
fn source_unavailable(#[from(loaded)] loaded: &LoadedCell) {
    with_loaded(loaded, |_, report| {
        assert!(matches!(report.source_error, Some(SourceError::Open { .. })));
    });
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/csv_loading.feature", name = $title)]
        fn $fn_name(data_path: PathCell, loaded: LoadedCell) {
            let _ = (data_path, loaded);
        }
    };
}

register_scenario!(loading_quirky_rows, "loading a file with quirky rows");
register_scenario!(cleaning_placeholders, "placeholder values in the file are cleaned");
register_scenario!(drawing_questions, "questions can be drawn from a loaded file");
register_scenario!(missing_file_is_empty, "a missing file leaves the store empty");
