use wordbank::{ExternalCodecSelector, TokenizerOptions};

use crate::vocab_file::VocabFileArgs;

/// Args for the reset command.
#[derive(clap::Args, Debug)]
pub struct ResetArgs {}

impl ResetArgs {
    /// Run the reset command; the vocabulary file is rewritten with only the special tokens.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = TokenizerOptions::default()
            .with_external_codec(ExternalCodecSelector::Disabled)
            .build();

        vocab.persist(&tokenizer)
    }
}
