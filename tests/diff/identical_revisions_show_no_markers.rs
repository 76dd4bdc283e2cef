use crate::common::command::{run_delta_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rstest::rstest;

#[rstest]
fn identical_revisions_show_no_markers(workspace_dir: TempDir) {
    let words: Vec<String> = Words(3..12).fake();
    let content = words.join(" ");
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), content.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), content.clone()));

    run_delta_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(format!("{content}\n"));
}

#[rstest]
fn appended_word_is_a_trailing_insertion(workspace_dir: TempDir) {
    let words: Vec<String> = Words(3..12).fake();
    let content = words.join(" ");
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), content.clone()));
    write_file(FileSpec::new(
        workspace_dir.path().join("b.txt"),
        format!("{content} zzqxv"),
    ));

    run_delta_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(format!("{content} <ins>zzqxv</ins>\n"));
}
