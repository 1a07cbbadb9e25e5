use wordbank::{ExternalCodecSelector, TokenizerOptions, WordbankError};

use crate::{input_output::InputArgs, vocab_file::VocabFileArgs};

/// Args for the learn command.
#[derive(clap::Args, Debug)]
pub struct LearnArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Minimum word count to learn a word; defaults to 1.
    #[arg(long)]
    min_frequency: Option<usize>,
}

impl LearnArgs {
    /// Run the learn command.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options =
            TokenizerOptions::default().with_external_codec(ExternalCodecSelector::Disabled);
        let mut tokenizer = vocab.open_tokenizer(options)?;

        let lines = self.input.read_lines()?;
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(WordbankError::InvalidInput("no text to learn".to_string()).into());
        }

        let min_frequency = self
            .min_frequency
            .unwrap_or(options.default_min_frequency());
        let report = tokenizer.learn_report(&lines, min_frequency);
        vocab.persist(&tokenizer)?;

        log::info!(
            "learned {} new tokens from {} lines",
            report.new_tokens,
            lines.len()
        );
        println!("{}", report.vocab_size);
        Ok(())
    }
}
