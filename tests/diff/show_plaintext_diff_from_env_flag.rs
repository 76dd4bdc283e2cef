use crate::common::command::{run_delta_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("1")]
#[case("true")]
fn show_plaintext_diff_from_env_flag(workspace_dir: TempDir, #[case] flag: &str) {
    run_delta_command(workspace_dir.path(), &["--text", "hello world", "hello earth"])
        .env("DELTA_PLAINTEXT", flag)
        .assert()
        .success()
        .stdout(predicate::eq("hello ---world--- +++earth+++\n"));
}

#[rstest]
fn show_plaintext_diff_from_flag(workspace_dir: TempDir) {
    run_delta_command(workspace_dir.path(), &["-p", "-t", "a b c d", "a x y d"])
        .assert()
        .success()
        .stdout(predicate::eq("a ---b c--- +++x y+++ d\n"));
}
