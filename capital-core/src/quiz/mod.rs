//! Multiple-choice capital quizzes drawn from a [`CountryQuery`].
//!
//! [`QuizGenerator`] borrows a store and keeps no state between calls, so one
//! generator (or many) may serve concurrent requests. Randomness comes from the
//! caller's RNG; [`QuizGenerator::next_question`] uses the thread-local one.

use rand::RngCore;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::CountryQuery;

mod session;

pub use session::{
    AnswerOutcome, DEFAULT_QUESTIONS, MAX_QUESTIONS, MIN_QUESTIONS, QuizSession, SessionError,
};

/// Number of answer choices offered per question.
pub const CHOICE_COUNT: usize = 4;

/// A single "what is the capital of ..." question.
///
/// The choices hold exactly [`CHOICE_COUNT`] distinct capitals, one of which
/// is the correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuizQuestion {
    country: String,
    correct_answer: String,
    choices: Vec<String>,
}

/// Reasons a [`QuizQuestion`] cannot be assembled.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionError {
    /// The choice list did not hold [`CHOICE_COUNT`] entries.
    #[error("expected {CHOICE_COUNT} choices, found {found}")]
    ChoiceCount {
        /// Number of choices supplied.
        found: usize,
    },
    /// A capital appeared more than once among the choices.
    #[error("choice {choice:?} appears more than once")]
    DuplicateChoice {
        /// The repeated capital.
        choice: String,
    },
    /// The correct answer was not among the choices.
    #[error("correct answer {answer:?} is not among the choices")]
    MissingAnswer {
        /// The absent correct answer.
        answer: String,
    },
}

impl QuizQuestion {
    /// Validate and construct a question.
    ///
    /// # Errors
    /// Returns [`QuestionError`] unless `choices` holds exactly
    /// [`CHOICE_COUNT`] distinct entries including `correct_answer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use capital_core::QuizQuestion;
    ///
    /// let choices = ["Lima", "Paris", "Tokyo", "Berlin"].map(String::from).to_vec();
    /// let question = QuizQuestion::new("Peru", "Lima", choices).expect("valid question");
    /// assert!(question.is_correct("Lima"));
    /// assert!(!question.is_correct("lima"));
    /// ```
    pub fn new(
        country: impl Into<String>,
        correct_answer: impl Into<String>,
        choices: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();
        if choices.len() != CHOICE_COUNT {
            return Err(QuestionError::ChoiceCount {
                found: choices.len(),
            });
        }
        for (position, choice) in choices.iter().enumerate() {
            if choices.iter().skip(position + 1).any(|other| other == choice) {
                return Err(QuestionError::DuplicateChoice {
                    choice: choice.clone(),
                });
            }
        }
        if !choices.contains(&correct_answer) {
            return Err(QuestionError::MissingAnswer {
                answer: correct_answer,
            });
        }
        Ok(Self {
            country: country.into(),
            correct_answer,
            choices,
        })
    }

    /// Name of the country asked about.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The capital of [`QuizQuestion::country`].
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Answer choices in presentation order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Whether `answer` matches the correct answer exactly.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// Reasons a question could not be generated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The store holds no countries.
    #[error("no countries are loaded")]
    EmptyStore,
    /// The store holds too few distinct capitals to fill the choices.
    #[error("need {required} distinct capitals for a question, found {distinct}")]
    DatasetTooSmall {
        /// Distinct capitals available.
        distinct: usize,
        /// Distinct capitals required.
        required: usize,
    },
    /// The sampling loop hit its draw limit before finding enough capitals.
    #[error("gave up after {draws} draws without {CHOICE_COUNT} distinct capitals")]
    DrawLimitExceeded {
        /// Draws attempted.
        draws: usize,
    },
    /// The assembled question failed validation.
    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl QuizError {
    /// Whether the error means "nothing to ask about" rather than a fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EmptyStore)
    }
}

/// Builds quiz questions from random draws over a store.
///
/// # Examples
///
/// ```
/// use capital_core::{Country, CountryDraft, CountryStore, QuizGenerator};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let store = CountryStore::from_countries(
///     [("France", "Paris"), ("Japan", "Tokyo"), ("Peru", "Lima"), ("Chad", "N'Djamena")]
///         .map(|(name, capital)| {
///             Country::new(CountryDraft {
///                 name: name.into(),
///                 capital: capital.into(),
///                 ..CountryDraft::default()
///             })
///             .expect("valid country")
///         }),
/// );
/// let generator = QuizGenerator::new(&store);
/// let question = generator
///     .next_question_with(&mut StdRng::seed_from_u64(3))
///     .expect("four distinct capitals");
/// assert!(question.choices().iter().any(|choice| choice == question.correct_answer()));
/// ```
#[derive(Debug)]
pub struct QuizGenerator<'a, S: ?Sized> {
    store: &'a S,
    max_draws: usize,
}

impl<S: ?Sized> Clone for QuizGenerator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for QuizGenerator<'_, S> {}

impl<'a, S> QuizGenerator<'a, S>
where
    S: CountryQuery + ?Sized,
{
    /// Draw limit applied to the choice sampling loop by default.
    pub const DEFAULT_MAX_DRAWS: usize = 10_000;

    /// Create a generator over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            max_draws: Self::DEFAULT_MAX_DRAWS,
        }
    }

    /// Override the draw limit of the choice sampling loop.
    #[must_use]
    pub const fn with_max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    /// Generate a question using the thread-local RNG.
    ///
    /// # Errors
    /// See [`QuizGenerator::next_question_with`].
    pub fn next_question(&self) -> Result<QuizQuestion, QuizError> {
        self.next_question_with(&mut rand::thread_rng())
    }

    /// Generate a question using `rng` for every draw and the final shuffle.
    ///
    /// The subject country fixes the correct answer. Further countries are
    /// drawn until [`CHOICE_COUNT`] distinct capitals are collected, and the
    /// choices are shuffled uniformly.
    ///
    /// # Errors
    /// Returns [`QuizError::EmptyStore`] when nothing is loaded,
    /// [`QuizError::DatasetTooSmall`] when fewer than [`CHOICE_COUNT`]
    /// distinct capitals exist, and [`QuizError::DrawLimitExceeded`] when the
    /// sampling loop exhausts its draw limit.
    pub fn next_question_with<R>(&self, rng: &mut R) -> Result<QuizQuestion, QuizError>
    where
        R: RngCore,
    {
        let draw: &mut dyn RngCore = rng;
        let subject = self.store.random(draw).ok_or(QuizError::EmptyStore)?;

        let distinct = self.store.distinct_capitals();
        if distinct < CHOICE_COUNT {
            return Err(QuizError::DatasetTooSmall {
                distinct,
                required: CHOICE_COUNT,
            });
        }

        let mut choices = Vec::with_capacity(CHOICE_COUNT);
        choices.push(subject.capital().to_owned());
        let mut draws = 0;
        while choices.len() < CHOICE_COUNT {
            if draws == self.max_draws {
                return Err(QuizError::DrawLimitExceeded { draws });
            }
            draws += 1;
            let candidate = self.store.random(draw).ok_or(QuizError::EmptyStore)?;
            if !choices.iter().any(|choice| choice == candidate.capital()) {
                choices.push(candidate.capital().to_owned());
            }
        }
        choices.shuffle(draw);

        Ok(QuizQuestion::new(
            subject.name(),
            subject.capital(),
            choices,
        )?)
    }
}
