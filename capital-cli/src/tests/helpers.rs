//! Test helpers for writing country files and invoking commands.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const SAMPLE_CSV: &str = "\
Country,Abbreviation,Population,Capital/Major City,Land Area(Km2),Currency-Code,Official language
France,FR,\"67,391,582\",Paris,\"551,695\",EUR,French
Germany,DE,\"83,132,799\",Berlin,\"357,022\",EUR,German
Japan,JP,\"126,476,461\",Tokyo,\"377,930\",JPY,Japanese
Brazil,BR,\"212,559,417\",Brasília,\"8,515,767\",BRL,Portuguese language
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

/// A temporary directory holding a country file.
#[derive(Debug)]
pub(super) struct DataDir {
    _dir: TempDir,
    root: Utf8PathBuf,
    data: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn with_contents(contents: &[u8]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let data = root.join("countries.csv");
        write_utf8(&data, contents);
        Self {
            _dir: dir,
            root,
            data,
        }
    }

    pub(super) fn sample() -> Self {
        Self::with_contents(SAMPLE_CSV.as_bytes())
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn data(&self) -> &Utf8Path {
        &self.data
    }

    pub(super) fn config(&self) -> AppConfig {
        AppConfig {
            data: self.data.clone(),
            log_level: None,
        }
    }
}

/// Parse `args` as a command line and execute it against `config`.
pub(super) fn run_command(
    config: &AppConfig,
    args: &[&str],
    input: &str,
) -> (Result<(), CliError>, String) {
    let argv = std::iter::once("capital-quest").chain(args.iter().copied());
    let mut stdout = Vec::new();
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| execute(config, cli.command, &mut input.as_bytes(), &mut stdout));
    let printed = String::from_utf8(stdout).expect("stdout utf-8");
    (outcome, printed)
}
