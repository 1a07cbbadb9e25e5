use wordbank::{ExternalCodecSelector, TokenizerOptions};

use crate::{input_output::OutputArgs, vocab_file::VocabFileArgs};

/// Args for the save command.
#[derive(clap::Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    output: OutputArgs,
}

impl SaveArgs {
    /// Run the save command; writes the vocabulary record as JSON.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options =
            TokenizerOptions::default().with_external_codec(ExternalCodecSelector::Disabled);
        let tokenizer = vocab.open_tokenizer(options)?;

        tokenizer.save().write_json(self.output.open_writer()?)?;
        Ok(())
    }
}
