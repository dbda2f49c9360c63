//! Entry point for the `capital-quest` binary.
#![forbid(unsafe_code)]

use capital_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match capital_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("capital-quest: {err}");
            std::process::exit(1);
        }
    }
}
