//! Tests for loading the TOML config.

use rewind::{CONFIG_ENV_VAR, EmptyCell, RewindConfig, render_board};
use rewind_tictactoe::GameHistory;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn write_config(dir: &Path, name: &str, empty_cell: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(
        &path,
        format!("[display]\nempty_cell = \"{}\"\nshow_moves = false\n", empty_cell),
    )
    .unwrap();
    path
}

/// Runs `rewind replay 4` in `dir` with extra args and env, returning stdout.
fn replay_center(dir: &Path, args: &[&str], env_config: Option<&Path>) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rewind"));
    cmd.current_dir(dir).env_remove(CONFIG_ENV_VAR).args(["replay", "4"]).args(args);
    if let Some(path) = env_config {
        cmd.env(CONFIG_ENV_VAR, path);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nempty_cell = \"dot\"\nshow_moves = false").unwrap();

    let config = RewindConfig::resolve(Some(file.path())).unwrap();
    assert_eq!(*config.display().empty_cell(), EmptyCell::Dot);
    assert!(!*config.display().show_moves());

    let game = GameHistory::replay(&[4]).unwrap();
    assert_eq!(
        render_board(game.current_board(), config.display()),
        ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|."
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RewindConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display\nempty_cell = ").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_config_from_environment_variable() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "env.toml", "dot");

    let out = replay_center(dir.path(), &[], Some(&config));
    assert_eq!(out, ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.\n\nNext player: O\n");
}

#[test]
fn test_explicit_config_wins_over_environment() {
    let dir = tempfile::tempdir().unwrap();
    let from_env = write_config(dir.path(), "env.toml", "dot");
    let explicit = write_config(dir.path(), "explicit.toml", "blank");
    let explicit_arg = explicit.to_str().unwrap();

    let out = replay_center(dir.path(), &["--config", explicit_arg], Some(&from_env));
    assert!(out.starts_with(" | | \n-+-+-\n |X| \n"));
}

#[test]
fn test_defaults_without_any_config() {
    let dir = tempfile::tempdir().unwrap();

    let out = replay_center(dir.path(), &[], None);
    assert!(out.starts_with("0|1|2\n-+-+-\n3|X|5\n"));
    assert!(out.contains("> 1. Go to move #1"));
}
