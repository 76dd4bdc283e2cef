use crate::common::command::{run_delta_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn color_always_highlights_changed_runs(workspace_dir: TempDir) {
    run_delta_command(
        workspace_dir.path(),
        &["--color", "always", "-p", "-t", "hello world", "hello earth"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("\u{1b}[31m---world---"))
    .stdout(predicate::str::contains("\u{1b}[32m+++earth+++"));
}

#[rstest]
fn color_never_leaves_output_plain(workspace_dir: TempDir) {
    run_delta_command(
        workspace_dir.path(),
        &["--color", "never", "-t", "hello world", "hello earth"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("hello <del>world</del> <ins>earth</ins>\n"));
}
