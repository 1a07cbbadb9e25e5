use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use wordbank::{TokenizerOptions, VocabRecord, VocabTokenizer};

/// Vocabulary file arg group.
#[derive(clap::Args, Debug)]
pub struct VocabFileArgs {
    /// The persisted vocabulary; created on first write.
    #[arg(long, global = true, default_value = "wordbank.json")]
    pub vocab: PathBuf,
}

impl VocabFileArgs {
    /// Build a tokenizer, loading the vocabulary file when it exists.
    pub fn open_tokenizer(
        &self,
        options: TokenizerOptions,
    ) -> Result<VocabTokenizer, Box<dyn std::error::Error>> {
        let mut tokenizer = options.build();

        if self.vocab.exists() {
            let reader = BufReader::new(File::open(&self.vocab)?);
            let record = VocabRecord::from_reader(reader)?;
            tokenizer.load(&record)?;
            log::info!(
                "loaded {} tokens from {}",
                tokenizer.vocab().len(),
                self.vocab.display()
            );
        } else {
            log::info!("{} not found; starting fresh", self.vocab.display());
        }

        Ok(tokenizer)
    }

    /// Write the tokenizer's vocabulary back to the vocabulary file.
    pub fn persist(
        &self,
        tokenizer: &VocabTokenizer,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let writer = BufWriter::new(File::create(&self.vocab)?);
        tokenizer.save().write_json(writer)?;
        log::info!(
            "saved {} tokens to {}",
            tokenizer.vocab().len(),
            self.vocab.display()
        );
        Ok(())
    }
}
