mod color_always_highlights_changed_runs;
mod identical_revisions_show_no_markers;
mod report_missing_revision_file;
mod show_plaintext_diff_from_env_flag;
mod show_word_diff_between_files;
mod unescape_requires_plaintext;
