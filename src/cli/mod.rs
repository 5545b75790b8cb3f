pub mod args;
pub mod commands;

pub use args::GenerateArgs;
use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\n{all-args}\n";

#[derive(Parser, Debug)]
#[command(name = "segflow")]
#[command(version = crate::VERSION)]
#[command(about = "Generate a 2-frame 4I2V segment workflow from the base graph")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Example:\n    segflow --start-image a.png --end-image b.png --motion zoom --output segment.json"
)]
pub struct Args {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Run the parsed command and return the path of the written workflow.
pub fn run(args: Args) -> crate::Result<PathBuf> {
    commands::generate(&args.generate)
}
