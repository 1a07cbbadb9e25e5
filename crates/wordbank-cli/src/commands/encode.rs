use std::io::Write;

use wordbank::WordbankError;

use crate::{
    codec_args::CodecArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_file::VocabFileArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Do not bracket each line with `<BOS>` / `<EOS>`.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_boundary: bool,

    /// Split unknown words into known subword pieces.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "external")]
    subword: bool,

    #[command(flatten)]
    codec: CodecArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// Each input line is written as one line of space-separated ids.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = vocab.open_tokenizer(self.codec.tokenizer_options())?;

        let lines = self.input.read_lines()?;
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(WordbankError::InvalidInput("no text to encode".to_string()).into());
        }

        let add_boundary_tokens = !self.no_boundary;
        let mut writer = self.output.open_writer()?;
        for line in &lines {
            let tokens = if self.subword {
                tokenizer.encode_subword(line, add_boundary_tokens)
            } else {
                tokenizer.encode(line, add_boundary_tokens, self.codec.external)
            };

            for (idx, token) in tokens.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}
