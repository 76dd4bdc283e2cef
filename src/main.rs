use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use delta::artifacts::core::output::Output;
use delta::commands::diff::{ColorChoice, DiffCommand, DiffOptions, Source};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DELTA_LOG";

#[derive(Parser)]
#[command(
    name = "delta",
    version = "0.1.0",
    about = "Show a word-level diff between two revisions of text",
    long_about = "This command compares two revisions of text word by word and prints \
    the current revision with deletions and insertions marked inline, \
    either as <del>/<ins> tags or as ---/+++ markers.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The previous revision (a path, or - for stdin)")]
    previous: String,
    #[arg(index = 2, help = "The current revision (a path, or - for stdin)")]
    current: String,
    #[arg(short, long, help = "Treat both revisions as literal text instead of paths")]
    text: bool,
    #[arg(
        short,
        long,
        env = "DELTA_PLAINTEXT",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
        help = "Mark changes with +++/--- instead of HTML tags"
    )]
    plaintext: bool,
    #[arg(
        short,
        long,
        requires = "plaintext",
        help = "Undo HTML escaping of the text (plain-text output only)"
    )]
    unescape: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color changed runs")]
    color: ColorChoice,
    #[arg(
        long,
        env = "NO_PAGER",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
        help = "Do not page the output"
    )]
    no_pager: bool,
    #[arg(short, long, help = "Log debug information to stderr")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("delta=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let is_terminal = std::io::stdout().is_terminal();
    let colored = cli.color.resolve(is_terminal);
    if cli.color == ColorChoice::Always {
        colored::control::set_override(true);
    }

    let output = if is_terminal && !cli.no_pager {
        Output::pager()
    } else {
        Output::stdout()
    };

    let previous = Source::parse(&cli.previous, cli.text);
    let current = Source::parse(&cli.current, cli.text);

    let mut command = DiffCommand::new(DiffOptions::new(cli.plaintext, cli.unescape, colored), output);
    command.run(&previous, &current)?;
    command.finish()
}
