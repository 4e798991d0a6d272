pub mod args;
pub mod commands;

pub use args::{ReportFormat, SimilarArgs, SummaryArgs, TransformArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "catalog-prep")]
#[command(version = crate::VERSION)]
#[command(about = "Filter, score, and reshape a game catalog export")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Without a subcommand, reads steamdb.json and writes project_data.json in the current directory."
)]
pub struct Args {
    /// Log at debug level on the console
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The subcommand to execute; a bare invocation means `transform`.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Transform(TransformArgs::default()))
    }

    /// Config file selected by the active subcommand, if any.
    pub fn config_path(&self) -> Option<&std::path::Path> {
        match &self.command {
            Some(Command::Transform(args)) => args.config.as_deref(),
            Some(Command::Summary(args)) => args.config.as_deref(),
            Some(Command::Similar(args)) => args.config.as_deref(),
            None => None,
        }
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    #[command(
        about = "Transform the raw catalog into the project dataset",
        long_about = "Transform keeps complete, English-language records with at least one score, averages the available scores into a rating, and writes the renamed fields as a JSON array.",
        after_help = "Example:\n    catalog-prep transform --input steamdb.json --output project_data.json"
    )]
    Transform(TransformArgs),
    #[command(
        about = "Summarize a transformed catalog",
        long_about = "Summary counts genres, modes, and tags across a transformed catalog and reports rating statistics.",
        after_help = "Example:\n    catalog-prep summary project_data.json --format json --top 5"
    )]
    Summary(SummaryArgs),
    #[command(
        about = "List the titles most similar to one title",
        long_about = "Similar compares price, modes, genres, tags, difficulty, duration, and rating across a transformed catalog and lists the closest titles first.",
        after_help = "Example:\n    catalog-prep similar 1091500 --limit 5"
    )]
    Similar(SimilarArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command_or_default() {
        Command::Transform(transform_args) => commands::transform(transform_args),
        Command::Summary(summary_args) => commands::summary(summary_args),
        Command::Similar(similar_args) => commands::similar(similar_args),
    }
}
