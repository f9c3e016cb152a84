//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use starbattle_config::PuzzleDefinition;
use starbattle_core::{Board, BoardDimensions, BoardMode};

pub const EASY_1_STARS: [u32; 9] = [130, 40, 257, 80, 5, 160, 10, 320, 20];

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/fixtures")
        .join(name)
}

pub fn easy_1() -> PuzzleDefinition {
    PuzzleDefinition::load(&fixture("easy_1.json"), BoardDimensions::STANDARD).unwrap()
}

pub fn easy_1_board(mode: BoardMode) -> Board {
    Board::new(BoardDimensions::STANDARD, easy_1().into_shapes(), mode)
}

/// Config file for CLI runs, so a real `~/.starbattle` never leaks in.
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

pub fn run_cli(config: &tempfile::NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_starbattle"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}
