use std::io::Write;

use wordbank::{TokenId, WordbankError};

use crate::{
    codec_args::CodecArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_file::VocabFileArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Keep the reserved special tokens in the output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    keep_special: bool,

    #[command(flatten)]
    codec: CodecArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    ///
    /// Each input line of ids is written as one line of text.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = vocab.open_tokenizer(self.codec.tokenizer_options())?;

        let mut writer = self.output.open_writer()?;
        for (idx, line) in self.input.read_lines()?.iter().enumerate() {
            let ids = parse_ids(line, idx + 1)?;
            let text = tokenizer.decode(&ids, !self.keep_special, self.codec.external);
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Parse a line of whitespace or comma separated integer ids.
///
/// Integers outside the id range (e.g. negative) name no token, and are dropped.
fn parse_ids(
    line: &str,
    line_no: usize,
) -> Result<Vec<TokenId>, WordbankError> {
    let mut ids = Vec::new();
    for field in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
    {
        let value: i64 = field.parse().map_err(|_| {
            WordbankError::InvalidInput(format!("line {line_no}: {field:?} is not an integer id"))
        })?;
        match TokenId::try_from(value) {
            Ok(id) => ids.push(id),
            Err(_) => log::debug!("line {line_no}: skipping out-of-range id {value}"),
        }
    }
    Ok(ids)
}
