use wordbank::{ExternalCodecSelector, TokenizerOptions};

use crate::vocab_file::VocabFileArgs;

/// Args for the add-special command.
#[derive(clap::Args, Debug)]
pub struct AddSpecialArgs {
    /// The token to register.
    token: String,

    /// Bind the token to this id, overriding any existing binding.
    #[arg(long, allow_negative_numbers = true)]
    id: Option<i64>,
}

impl AddSpecialArgs {
    /// Run the add-special command; prints the token's id.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options =
            TokenizerOptions::default().with_external_codec(ExternalCodecSelector::Disabled);
        let mut tokenizer = vocab.open_tokenizer(options)?;

        let id = tokenizer.add_special_token(&self.token, self.id)?;
        vocab.persist(&tokenizer)?;

        println!("{id}");
        Ok(())
    }
}
