//! One-shot commands that print JSON.

use std::io::Write;

use camino::Utf8Path;
use capital_core::{CountryQuery, QuizGenerator};
use rand::RngCore;
use serde::Serialize;

use crate::CliError;

pub(crate) fn list_countries<S>(store: &S, writer: &mut dyn Write) -> Result<(), CliError>
where
    S: CountryQuery + ?Sized,
{
    write_json(writer, store.all())
}

pub(crate) fn random_country<S>(
    store: &S,
    data: &Utf8Path,
    rng: &mut dyn RngCore,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    S: CountryQuery + ?Sized,
{
    let country = store.random(rng).ok_or_else(|| CliError::NoCountries {
        path: data.to_path_buf(),
    })?;
    write_json(writer, country)
}

pub(crate) fn search_country<S>(
    store: &S,
    query: &str,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    S: CountryQuery + ?Sized,
{
    let country = store
        .search(query)
        .ok_or_else(|| CliError::CountryNotFound {
            query: query.to_owned(),
        })?;
    write_json(writer, country)
}

pub(crate) fn quiz_question<S, R>(
    store: &S,
    rng: &mut R,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    S: CountryQuery + ?Sized,
    R: RngCore,
{
    let question = QuizGenerator::new(store).next_question_with(rng)?;
    write_json(writer, &question)
}

fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
