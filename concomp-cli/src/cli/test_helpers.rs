//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, CommandOutput, ComponentsSummary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn expect_components(output: CommandOutput) -> ComponentsSummary {
    match output {
        CommandOutput::Components(summary) => summary,
        CommandOutput::Experiment(other) => panic!("expected component labels, got {other:?}"),
    }
}

pub(super) fn labels_of(summary: &ComponentsSummary) -> Vec<Vec<usize>> {
    summary
        .runs
        .iter()
        .map(|run| run.labels.as_slice().to_vec())
        .collect()
}
