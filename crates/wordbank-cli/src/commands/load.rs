use wordbank::{ExternalCodecSelector, TokenizerOptions, VocabRecord};

use crate::{input_output::InputArgs, vocab_file::VocabFileArgs};

/// Args for the load command.
#[derive(clap::Args, Debug)]
pub struct LoadArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl LoadArgs {
    /// Run the load command.
    ///
    /// Replaces the vocabulary file wholesale; it is untouched if the input is malformed.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let record = VocabRecord::from_reader(self.input.open_reader()?)?;

        let mut tokenizer = TokenizerOptions::default()
            .with_external_codec(ExternalCodecSelector::Disabled)
            .build();
        tokenizer.load(&record)?;

        vocab.persist(&tokenizer)
    }
}
