use crate::common::command::{run_delta_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_word_diff_between_files(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let previous = FileSpec::new(workspace_dir.path().join("v1.txt"), "hello world".to_string());
    write_file(previous);
    let current = FileSpec::new(workspace_dir.path().join("v2.txt"), "hello earth".to_string());
    write_file(current);

    let actual_output = run_delta_command(workspace_dir.path(), &["v1.txt", "v2.txt"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, "hello <del>world</del> <ins>earth</ins>\n");

    Ok(())
}
