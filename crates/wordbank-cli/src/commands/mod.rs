use crate::{
    commands::{
        add_special::AddSpecialArgs,
        decode::DecodeArgs,
        encode::EncodeArgs,
        learn::LearnArgs,
        load::LoadArgs,
        reset::ResetArgs,
        save::SaveArgs,
        stats::StatsArgs,
    },
    vocab_file::VocabFileArgs,
};

pub mod add_special;
pub mod decode;
pub mod encode;
pub mod learn;
pub mod load;
pub mod reset;
pub mod save;
pub mod stats;

/// Subcommands for wordbank.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn words from text; one sample per line.
    Learn(LearnArgs),

    /// Encode each line of text to ids.
    Encode(EncodeArgs),

    /// Decode each line of ids to text.
    Decode(DecodeArgs),

    /// Register a special token.
    AddSpecial(AddSpecialArgs),

    /// Print vocabulary stats as JSON.
    Stats(StatsArgs),

    /// Export the vocabulary record.
    Save(SaveArgs),

    /// Replace the vocabulary with an exported record.
    Load(LoadArgs),

    /// Reset the vocabulary to the special tokens.
    Reset(ResetArgs),
}

impl Commands {
    /// Run the subcommand against the vocabulary file.
    pub fn run(
        &self,
        vocab: &VocabFileArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Learn(cmd) => cmd.run(vocab),
            Commands::Encode(cmd) => cmd.run(vocab),
            Commands::Decode(cmd) => cmd.run(vocab),
            Commands::AddSpecial(cmd) => cmd.run(vocab),
            Commands::Stats(cmd) => cmd.run(vocab),
            Commands::Save(cmd) => cmd.run(vocab),
            Commands::Load(cmd) => cmd.run(vocab),
            Commands::Reset(cmd) => cmd.run(vocab),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use tempdir::TempDir;
    use wordbank::{VocabRecord, WordbankError};

    use crate::Args;

    fn run(
        vocab: &Path,
        argv: &[&str],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = vocab.to_str().unwrap();
        let args = Args::try_parse_from(
            ["wordbank", "--vocab", vocab]
                .into_iter()
                .chain(argv.iter().copied()),
        )?;
        args.command.run(&args.vocab)
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    fn read_record(path: &Path) -> VocabRecord {
        VocabRecord::from_json_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_learn_encode_decode() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");
        let ids = dir.path().join("ids.txt");
        let decoded = dir.path().join("decoded.txt");

        fs::write(&text, "the cat sat on the mat\n").unwrap();
        run(&vocab, &["learn", "--input", path_str(&text)]).unwrap();
        assert_eq!(read_record(&vocab).vocab.len(), 10);

        fs::write(&text, "the dog sat\n\n").unwrap();
        run(
            &vocab,
            &[
                "encode",
                "--no-boundary",
                "--input",
                path_str(&text),
                "--output",
                path_str(&ids),
            ],
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&ids).unwrap(), "5 1 7\n\n");

        run(
            &vocab,
            &[
                "decode",
                "--input",
                path_str(&ids),
                "--output",
                path_str(&decoded),
            ],
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&decoded).unwrap(), "the sat\n\n");
    }

    #[test]
    fn test_encode_subword() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");
        let ids = dir.path().join("ids.txt");

        fs::write(&text, "play ing\n").unwrap();
        run(&vocab, &["learn", "--input", path_str(&text)]).unwrap();

        fs::write(&text, "playing\n").unwrap();
        run(
            &vocab,
            &[
                "encode",
                "--subword",
                "--input",
                path_str(&text),
                "--output",
                path_str(&ids),
            ],
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&ids).unwrap(), "2 5 6 3\n");
    }

    #[test]
    fn test_decode_keep_special_and_bad_ids() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let ids = dir.path().join("ids.txt");
        let decoded = dir.path().join("decoded.txt");

        fs::write(&ids, "0 1 2 99 3\n-4, 4\n").unwrap();
        run(
            &vocab,
            &[
                "decode",
                "--keep-special",
                "--input",
                path_str(&ids),
                "--output",
                path_str(&decoded),
            ],
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(&decoded).unwrap(),
            "<PAD> <UNK> <BOS> <EOS>\n<SEP>\n"
        );

        fs::write(&ids, "1 x 2\n").unwrap();
        let err = run(&vocab, &["decode", "--input", path_str(&ids)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordbankError>(),
            Some(WordbankError::InvalidInput(_))
        ));

        // Decoding never writes the vocabulary file.
        assert!(!vocab.exists());
    }

    #[test]
    fn test_learn_rejects_empty_input() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");

        fs::write(&text, "\n  \n").unwrap();
        let err = run(&vocab, &["learn", "--input", path_str(&text)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordbankError>(),
            Some(WordbankError::InvalidInput(_))
        ));
        assert!(!vocab.exists());
    }

    #[test]
    fn test_add_special() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");

        run(&vocab, &["add-special", "<CLS>"]).unwrap();
        run(&vocab, &["add-special", "<MASK>", "--id", "40"]).unwrap();

        let record = read_record(&vocab);
        assert_eq!(record.vocab.get("<CLS>"), Some(&5));
        assert_eq!(record.vocab.get("<MASK>"), Some(&40));
        assert_eq!(record.next_token_id, 41);

        let err = run(&vocab, &["add-special", "<X>", "--id", "-1"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordbankError>(),
            Some(WordbankError::InvalidId { .. })
        ));
        assert!(!read_record(&vocab).vocab.contains_key("<X>"));
    }

    #[test]
    fn test_stats() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let stats = dir.path().join("stats.json");

        run(&vocab, &["add-special", "<CLS>"]).unwrap();

        run(&vocab, &["stats", "--output", path_str(&stats)]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&stats).unwrap()).unwrap();
        assert_eq!(json["vocabSize"], 6);
        assert_eq!(json["specialTokensCount"], 5);
        assert_eq!(json["specialTokens"]["<UNK>"], 1);
        assert!(json.get("vocabulary").is_none());

        run(&vocab, &["stats", "--full", "--output", path_str(&stats)]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&stats).unwrap()).unwrap();
        assert_eq!(json["vocabulary"]["<CLS>"], 5);
    }

    #[test]
    fn test_save_reset_load() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");
        let backup = dir.path().join("backup.json");

        fs::write(&text, "alpha beta\ngamma\n").unwrap();
        run(&vocab, &["learn", "--input", path_str(&text)]).unwrap();
        let learned = read_record(&vocab);
        assert_eq!(learned.vocab.len(), 8);

        run(&vocab, &["save", "--output", path_str(&backup)]).unwrap();
        run(&vocab, &["reset"]).unwrap();
        assert_eq!(read_record(&vocab).vocab.len(), 5);

        run(&vocab, &["load", "--input", path_str(&backup)]).unwrap();
        assert_eq!(read_record(&vocab), learned);

        fs::write(&backup, r#"{"vocab": {"a": 1.5}}"#).unwrap();
        let err = run(&vocab, &["load", "--input", path_str(&backup)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordbankError>(),
            Some(WordbankError::MalformedVocabulary(_))
        ));
        assert_eq!(read_record(&vocab), learned);
    }

    #[test]
    fn test_learn_min_frequency() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");

        fs::write(&text, "the cat sat\nthe dog sat\n").unwrap();
        run(
            &vocab,
            &["learn", "--min-frequency", "2", "--input", path_str(&text)],
        )
        .unwrap();

        let record = read_record(&vocab);
        assert_eq!(record.vocab.get("the"), Some(&5));
        assert_eq!(record.vocab.get("sat"), Some(&6));
        assert_eq!(record.vocab.len(), 7);
    }

    #[test]
    fn test_encode_rejects_blank_input() {
        let dir = TempDir::new("wordbank-cli").unwrap();
        let vocab = dir.path().join("vocab.json");
        let text = dir.path().join("text.txt");
        let ids = dir.path().join("ids.txt");

        for blank in ["", "   \n\t\n"] {
            fs::write(&text, blank).unwrap();
            let err = run(
                &vocab,
                &[
                    "encode",
                    "--input",
                    path_str(&text),
                    "--output",
                    path_str(&ids),
                ],
            )
            .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<WordbankError>(),
                Some(WordbankError::InvalidInput(_))
            ));
        }
        assert!(!ids.exists());
    }
}
