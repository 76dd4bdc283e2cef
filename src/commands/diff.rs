use crate::artifacts::core::output::Output;
use crate::artifacts::diff::diff_segments;
use crate::artifacts::diff::render::{self, DEL_MARKER, INS_MARKER};
use crate::artifacts::diff::segment::{DEL_CLOSE, DEL_OPEN, INS_CLOSE, INS_OPEN};
use crate::artifacts::diff::token::unescape_html;
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use regex::Regex;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::LazyLock;

pub const STDIN_SOURCE: &str = "-";
pub const INS_RUN_REGEX: &str = r"(?s)<ins>(.*?)</ins>";
pub const DEL_RUN_REGEX: &str = r"(?s)<del>(.*?)</del>";

static INS_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INS_RUN_REGEX).expect("insertion run pattern is valid"));
static DEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEL_RUN_REGEX).expect("deletion run pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only a terminal, and defers to `NO_COLOR` / `CLICOLOR` through `colored`.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                is_terminal && colored::control::SHOULD_COLORIZE.should_colorize()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct DiffOptions {
    pub plaintext: bool,
    pub unescape: bool,
    pub colored: bool,
}

/// Where one revision is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl Source {
    pub fn parse(arg: &str, literal: bool) -> Self {
        match arg {
            _ if literal => Source::Text(arg.to_string()),
            STDIN_SOURCE => Source::Stdin,
            path => Source::File(PathBuf::from(path)),
        }
    }

    /// Reads the revision, decoding invalid UTF-8 lossily.
    pub fn read(&self) -> anyhow::Result<String> {
        let bytes = match self {
            Source::Text(text) => return Ok(text.clone()),
            Source::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read revision from stdin")?;
                bytes
            }
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read revision {}", path.display()))?,
        };

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[derive(new)]
pub struct DiffCommand {
    options: DiffOptions,
    writer: Output,
}

impl DiffCommand {
    pub fn run(&mut self, previous: &Source, current: &Source) -> anyhow::Result<()> {
        if *previous == Source::Stdin && *current == Source::Stdin {
            anyhow::bail!("only one revision can be read from stdin");
        }

        let previous = previous.read()?;
        let current = current.read()?;

        let rendered = self.render(&previous, &current);
        writeln!(self.writer, "{rendered}").context("failed to write diff")?;

        Ok(())
    }

    pub fn render(&self, previous: &str, current: &str) -> String {
        let segments = diff_segments(previous, current);
        let markup = render::merged_markup(&segments);

        let markup = match (self.options.colored, self.options.plaintext) {
            (true, plaintext) => highlight(&markup, plaintext),
            (false, true) => render::to_plaintext(&markup),
            (false, false) => markup,
        };

        let rendered = render::restore_newlines(&markup);
        if self.options.unescape {
            unescape_html(&rendered)
        } else {
            rendered
        }
    }

    pub fn finish(self) -> anyhow::Result<()> {
        self.writer.finish()
    }
}

/// Colors merged runs, inserted green and deleted red, keeping their markers.
fn highlight(markup: &str, plaintext: bool) -> String {
    let (ins_open, ins_close, del_open, del_close) = if plaintext {
        (INS_MARKER, INS_MARKER, DEL_MARKER, DEL_MARKER)
    } else {
        (INS_OPEN, INS_CLOSE, DEL_OPEN, DEL_CLOSE)
    };

    let highlighted = INS_RUN.replace_all(markup, |caps: &regex::Captures| {
        format!("{ins_open}{}{ins_close}", &caps[1]).green().to_string()
    });
    DEL_RUN
        .replace_all(&highlighted, |caps: &regex::Captures| {
            format!("{del_open}{}{del_close}", &caps[1]).red().to_string()
        })
        .into_owned()
}
