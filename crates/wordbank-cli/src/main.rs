mod codec_args;
mod commands;
mod input_output;
mod logging;
mod vocab_file;

use clap::Parser;
use commands::Commands;

use crate::{logging::LogArgs, vocab_file::VocabFileArgs};

/// wordbank: learn, extend, and apply a word vocabulary.
#[derive(clap::Parser, Debug)]
#[command(name = "wordbank", version)]
pub struct Args {
    #[command(flatten)]
    pub vocab: VocabFileArgs,

    #[command(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run(&args.vocab)
}
