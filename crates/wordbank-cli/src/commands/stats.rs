use std::io::Write;

use wordbank::{ExternalCodecSelector, TokenizerOptions};

use crate::{input_output::OutputArgs, vocab_file::VocabFileArgs};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Include the full vocabulary mapping.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    full: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl StatsArgs {
    /// Run the stats command; writes the stats as JSON.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options =
            TokenizerOptions::default().with_external_codec(ExternalCodecSelector::Disabled);
        let tokenizer = vocab.open_tokenizer(options)?;

        let mut stats = serde_json::to_value(tokenizer.stats())?;
        if !self.full
            && let Some(fields) = stats.as_object_mut()
        {
            fields.remove("vocabulary");
        }

        let mut writer = self.output.open_writer()?;
        serde_json::to_writer_pretty(&mut writer, &stats)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
