use crate::common::command::{run_delta_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_missing_revision_file(workspace_dir: TempDir) {
    let previous = FileSpec::new(workspace_dir.path().join("exists.txt"), "one".to_string());
    write_file(previous);

    run_delta_command(workspace_dir.path(), &["exists.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read revision missing.txt"));
}
