//! Behavioural tests for question generation and quiz sessions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::collections::HashSet;

use capital_core::{
    CHOICE_COUNT, Country, CountryDraft, CountryQuery, CountryStore, QuizError, QuizGenerator,
    QuizQuestion, QuizSession,
};

type StoreCell = RefCell<Option<CountryStore>>;
type OutcomeCell = RefCell<Option<Result<QuizQuestion, QuizError>>>;
type SessionCell = RefCell<Option<QuizSession>>;

#[fixture]
fn store() -> StoreCell {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> OutcomeCell {
    RefCell::new(None)
}

#[fixture]
fn session() -> SessionCell {
    RefCell::new(None)
}

fn country(name: &str, capital: &str) -> Country {
    Country::new(CountryDraft {
        name: name.to_owned(),
        capital: capital.to_owned(),
        ..CountryDraft::default()
    })
    .expect("valid country")
}

fn with_store<T>(store: &StoreCell, f: impl FnOnce(&CountryStore) -> T) -> T {
    let store = store.borrow();
    f(store.as_ref().expect("a store should be set up"))
}

// --- Given steps ---

#[given("a store loaded with France, Germany, Japan and Brazil")]
fn sample_store(#[from(store)] store: &StoreCell) {
    *store.borrow_mut() = Some(CountryStore::from_countries([
        country("France", "Paris"),
        country("Germany", "Berlin"),
        country("Japan", "Tokyo"),
        country("Brazil", "Brasília"),
    ]));
}

#[given("a store whose countries share three capitals")]
fn shared_capitals(#[from(store)] store: &StoreCell) {
    *store.borrow_mut() = Some(CountryStore::from_countries([
        country("France", "Paris"),
        country("Old France", "Paris"),
        country("Germany", "Berlin"),
        country("Japan", "Tokyo"),
    ]));
}

#[given("an empty store")]
fn empty_store(#[from(store)] store: &StoreCell) {
    *store.borrow_mut() = Some(CountryStore::default());
}

// --- When steps ---

#[when("I generate a question")]
fn generate(#[from(store)] store: &StoreCell, #[from(outcome)] outcome: &OutcomeCell) {
    let question = with_store(store, |store| {
        QuizGenerator::new(store).next_question_with(&mut ChaCha8Rng::seed_from_u64(21))
    });
    *outcome.borrow_mut() = Some(question);
}

#[when("I play {count} questions answering each correctly")]
fn play_correctly(
    #[from(store)] store: &StoreCell,
    #[from(session)] session: &SessionCell,
    count: u32,
) {
    let played = with_store(store, |store| {
        let generator = QuizGenerator::new(store);
        let mut rng = ChaCha8Rng::seed_from_u64(34);
        let mut session = QuizSession::new(count).expect("valid question count");
        while let Some(answer) = session
            .next_question(&generator, &mut rng)
            .expect("question generated")
            .map(|question| question.correct_answer().to_owned())
        {
            let feedback = session.submit(&answer).expect("active question");
            assert!(feedback.is_correct(), "{feedback}");
        }
        session
    });
    *session.borrow_mut() = Some(played);
}

// --- Then steps ---

#[then("the question offers {count} distinct choices")]
fn distinct_choices(#[from(outcome)] outcome: &OutcomeCell, count: usize) {
    let outcome = outcome.borrow();
    let question = match outcome.as_ref() {
        Some(Ok(question)) => question,
        other => panic!("expected a question, got {other:?}"),
    };
    let choices: HashSet<&String> = question.choices().iter().collect();
    assert_eq!(choices.len(), count);
    assert_eq!(count, CHOICE_COUNT);
}

#[then("the correct answer is the capital of the asked country")]
fn answer_matches_country(
    #[from(store)] store: &StoreCell,
    #[from(outcome)] outcome: &OutcomeCell,
) {
    let outcome = outcome.borrow();
    let Some(Ok(question)) = outcome.as_ref() else {
        panic!("expected a question, got {outcome:?}");
    };
    assert!(question.choices().iter().any(|c| c == question.correct_answer()));
    let capital = with_store(store, |store| {
        store.search(question.country()).map(|c| c.capital().to_owned())
    });
    assert_eq!(capital.as_deref(), Some(question.correct_answer()));
}

#[then("generation fails because the dataset is too small")]
fn too_small(#[from(outcome)] outcome: &OutcomeCell) {
    assert!(matches!(
        *outcome.borrow(),
        Some(Err(QuizError::DatasetTooSmall { distinct: 3, .. }))
    ));
}

#[then("generation fails because no countries are loaded")]
fn nothing_loaded(#[from(outcome)] outcome: &OutcomeCell) {
    assert!(matches!(*outcome.borrow(), Some(Err(QuizError::EmptyStore))));
}

#[then("the score is {score}")]
fn score_is(#[from(session)] session: &SessionCell, score: u32) {
    let session = session.borrow();
    assert_eq!(session.as_ref().map(QuizSession::score), Some(score));
}

#[then("the accuracy is {percent} percent")]
fn accuracy_is(#[from(session)] session: &SessionCell, percent: f64) {
    let session = session.borrow();
    let accuracy = session.as_ref().map_or(0.0, QuizSession::accuracy);
    assert!((accuracy - percent).abs() < 1e-9);
}

#[then("the session is finished")]
fn finished(#[from(session)] session: &SessionCell) {
    assert!(session.borrow().as_ref().is_some_and(QuizSession::is_finished));
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/quiz.feature", name = $title)]
        fn $fn_name(store: StoreCell, outcome: OutcomeCell, session: SessionCell) {
            let _ = (store, outcome, session);
        }
    };
}

register_scenario!(
    generating_a_question,
    "generating a question from four countries"
);
register_scenario!(too_few_capitals, "too few distinct capitals");
register_scenario!(nothing_to_ask, "nothing loaded");
register_scenario!(
    perfect_session,
    "answering every question of a session correctly"
);
