//! Interactive terminal quiz.

use std::io::{BufRead, Write};

use capital_core::{CountryQuery, QuizGenerator, QuizQuestion, QuizSession};
use log::info;
use rand::RngCore;

use crate::CliError;
use crate::config::PlayConfig;

macro_rules! say {
    ($output:expr) => {
        writeln!($output).map_err(CliError::WriteOutput)
    };
    ($output:expr, $($arg:tt)*) => {
        writeln!($output, $($arg)*).map_err(CliError::WriteOutput)
    };
}

/// Play `config.questions` questions, reading one answer per line.
///
/// End of input abandons the game early; the summary is still printed.
pub(crate) fn play<S, R>(
    store: &S,
    config: PlayConfig,
    rng: &mut R,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<QuizSession, CliError>
where
    S: CountryQuery + ?Sized,
    R: RngCore,
{
    let generator = QuizGenerator::new(store);
    let mut session = QuizSession::new(config.questions)?;
    say!(output, "Capital quiz: {} questions", session.total())?;

    while let Some(question) = session.next_question(&generator, rng)?.cloned() {
        say!(output)?;
        say!(
            output,
            "Question {}/{}: What is the capital of {}?",
            session.question_number(),
            session.total(),
            question.country()
        )?;
        for (number, choice) in question.choices().iter().enumerate() {
            say!(output, "  {}. {choice}", number + 1)?;
        }

        let Some(line) = read_answer(input, output)? else {
            say!(output)?;
            say!(output, "Quiz ended early.")?;
            break;
        };
        let outcome = session.submit(&resolve_answer(&question, &line))?;
        say!(output, "{outcome}")?;
    }

    say!(output)?;
    say!(
        output,
        "Final score: {}/{}",
        session.score(),
        session.question_number()
    )?;
    say!(output, "Accuracy: {:.1}%", session.accuracy())?;
    info!(
        "Quiz finished with {} of {} correct",
        session.score(),
        session.question_number()
    );
    Ok(session)
}

fn read_answer(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Option<String>, CliError> {
    write!(output, "Your answer: ").map_err(CliError::WriteOutput)?;
    output.flush().map_err(CliError::WriteOutput)?;
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(CliError::ReadInput)?;
    Ok((read != 0).then_some(line))
}

/// Map a typed answer onto a choice.
///
/// A choice number selects that choice; otherwise a case-insensitive capital
/// name selects the matching choice. Anything else is submitted as typed.
pub(crate) fn resolve_answer(question: &QuizQuestion, line: &str) -> String {
    let typed = line.trim();
    let choices = question.choices();
    let by_number = typed
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|position| choices.get(position));
    let lowered = typed.to_lowercase();
    by_number
        .or_else(|| choices.iter().find(|choice| choice.to_lowercase() == lowered))
        .map_or_else(|| typed.to_owned(), Clone::clone)
}
