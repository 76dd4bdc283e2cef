use crate::common::command::{run_delta_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn unescape_requires_plaintext(workspace_dir: TempDir) {
    run_delta_command(workspace_dir.path(), &["--unescape", "--text", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--plaintext"));
}
