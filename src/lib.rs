//! Facade crate for Capital Quest.
//!
//! Re-exports the country store and quiz types from `capital-core`, plus the
//! CSV loader from `capital-data` behind the `csv` feature.

#![forbid(unsafe_code)]

pub use capital_core::{
    AnswerOutcome, CHOICE_COUNT, Country, CountryDraft, CountryError, CountryQuery, CountryStore,
    LoadReport, NormaliseError, QuestionError, QuizError, QuizGenerator, QuizQuestion, QuizSession,
    RawRecord, RecordSource, SessionError, SourceError, columns,
};

#[cfg(feature = "csv")]
pub use capital_data::{CsvRecordSource, DEFAULT_DATA_FILE, load_countries};
