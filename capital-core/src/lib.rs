//! Core domain types for Capital Quest.
//!
//! The crate turns raw tabular country records into immutable [`Country`]
//! values, serves them from an indexed, read-only [`CountryStore`], and builds
//! multiple-choice capital quizzes on top of the store.
//!
//! Nothing here performs I/O on the query path. Record sources are supplied by
//! adapter crates through the [`RecordSource`] trait and read once at load
//! time.
//!
//! # Examples
//!
//! ```
//! use capital_core::{CountryQuery, CountryStore, QuizGenerator, RawRecord, columns};
//!
//! let row = |name: &str, capital: &str, code: &str| {
//!     RawRecord::from([
//!         (columns::NAME.to_owned(), name.to_owned()),
//!         (columns::CAPITAL.to_owned(), capital.to_owned()),
//!         (columns::CODE.to_owned(), code.to_owned()),
//!     ])
//! };
//! let records = vec![
//!     row("France", "Paris", "FR"),
//!     row("Germany", "Berlin", "DE"),
//!     row("Japan", "Tokyo", "JP"),
//!     row("Brazil", "Brasília", "BR"),
//! ];
//!
//! let store = CountryStore::load(&records);
//! assert_eq!(store.all().len(), 4);
//! assert_eq!(store.search("jp").map(|c| c.capital()), Some("Tokyo"));
//!
//! let question = QuizGenerator::new(&store).next_question()?;
//! assert_eq!(question.choices().len(), 4);
//! # Ok::<(), capital_core::QuizError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod country;
mod normalise;
pub mod quiz;
mod source;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use country::{Country, CountryDraft, CountryError, MIN_CODE_LENGTH};
pub use normalise::{
    NormaliseError, clean_language, has_required_fields, normalise_record, parse_number,
};
pub use quiz::{
    AnswerOutcome, CHOICE_COUNT, QuestionError, QuizError, QuizGenerator, QuizQuestion,
    QuizSession, SessionError,
};
pub use source::{RawRecord, RecordError, RecordIter, RecordSource, SourceError, columns};
pub use store::{CountryQuery, CountryStore, LoadReport, RowError, RowRejection};
