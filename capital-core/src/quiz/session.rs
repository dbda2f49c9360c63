//! A scored game of several quiz questions.

use std::fmt;

use rand::RngCore;
use thiserror::Error;

use super::{QuizError, QuizGenerator, QuizQuestion};
use crate::CountryQuery;

/// Fewest questions a session may hold.
pub const MIN_QUESTIONS: u32 = 5;
/// Most questions a session may hold.
pub const MAX_QUESTIONS: u32 = 100;
/// Question count used when none is requested.
pub const DEFAULT_QUESTIONS: u32 = 10;

/// Misuse of a [`QuizSession`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The requested question count lies outside the allowed range.
    #[error("question count {requested} is outside {min}..={max}")]
    QuestionCount {
        /// Count asked for.
        requested: u32,
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
    /// No question is waiting for an answer.
    #[error("no question is awaiting an answer")]
    NoActiveQuestion,
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    correct: bool,
    country: String,
    capital: String,
}

impl AnswerOutcome {
    /// Whether the submitted answer was right.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Country the question asked about.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The correct capital.
    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.correct { "Correct!" } else { "Incorrect." };
        write!(
            f,
            "{verdict} The capital of {} is {}.",
            self.country, self.capital
        )
    }
}

/// Progress through a fixed number of questions.
///
/// # Examples
///
/// ```
/// use capital_core::QuizSession;
///
/// assert!(QuizSession::new(4).is_err());
/// let session = QuizSession::new(5).expect("in range");
/// assert_eq!(session.total(), 5);
/// assert!(!session.is_finished());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    total: u32,
    asked: u32,
    score: u32,
    current: Option<QuizQuestion>,
    awaiting_answer: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::with_total(DEFAULT_QUESTIONS)
    }
}

impl QuizSession {
    /// Start a session of `total` questions.
    ///
    /// # Errors
    /// Returns [`SessionError::QuestionCount`] unless `total` lies within
    /// [`MIN_QUESTIONS`]`..=`[`MAX_QUESTIONS`].
    pub fn new(total: u32) -> Result<Self, SessionError> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&total) {
            return Err(SessionError::QuestionCount {
                requested: total,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }
        Ok(Self::with_total(total))
    }

    const fn with_total(total: u32) -> Self {
        Self {
            total,
            asked: 0,
            score: 0,
            current: None,
            awaiting_answer: false,
        }
    }

    /// Draw the next question, or `None` once every question has been asked.
    ///
    /// An unanswered question is abandoned and scores nothing.
    ///
    /// # Errors
    /// Propagates [`QuizError`] from the generator; the question count is not
    /// advanced in that case.
    pub fn next_question<S, R>(
        &mut self,
        generator: &QuizGenerator<'_, S>,
        rng: &mut R,
    ) -> Result<Option<&QuizQuestion>, QuizError>
    where
        S: CountryQuery + ?Sized,
        R: RngCore,
    {
        if self.asked >= self.total {
            self.awaiting_answer = false;
            return Ok(None);
        }
        let question = generator.next_question_with(rng)?;
        self.asked += 1;
        self.awaiting_answer = true;
        self.current = Some(question);
        Ok(self.current.as_ref())
    }

    /// Question currently on display, answered or not.
    #[must_use]
    pub const fn current(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    /// Answer the active question.
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveQuestion`] before the first question
    /// and when the active question was already answered.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome, SessionError> {
        let question = match &self.current {
            Some(question) if self.awaiting_answer => question,
            _ => return Err(SessionError::NoActiveQuestion),
        };
        let correct = question.is_correct(answer);
        let outcome = AnswerOutcome {
            correct,
            country: question.country().to_owned(),
            capital: question.correct_answer().to_owned(),
        };
        self.awaiting_answer = false;
        if correct {
            self.score += 1;
        }
        Ok(outcome)
    }

    /// Correct answers so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// One-based number of the current question; zero before the first.
    #[must_use]
    pub const fn question_number(&self) -> u32 {
        self.asked
    }

    /// Questions in the session.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Whether every question has been asked and answered or abandoned.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.asked >= self.total && !self.awaiting_answer
    }

    /// Percentage of asked questions answered correctly.
    ///
    /// Zero before any question is asked.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "accuracy is reported as a percentage"
    )]
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.asked) * 100.0
    }

    /// Return to the start with the same question count.
    pub fn reset(&mut self) {
        *self = Self::with_total(self.total);
    }
}
