//! # Encoder Test Utilities

use crate::{
    decoders::WordDecoder,
    encoders::TokenEncoder,
    spanning::normalize_text,
    vocab::{SpecialToken, Vocabulary},
};

/// Build common test vocabulary for [`TokenEncoder`] tests.
pub fn common_encoder_test_vocab() -> Vocabulary {
    let mut vocab = Vocabulary::new();
    for word in ["hello", "world", "the", "quick", "brown", "fox"] {
        vocab.insert(word).unwrap();
    }
    vocab
}

/// Common [`TokenEncoder`] tests.
///
/// Expects a vocabulary built by [`common_encoder_test_vocab`].
pub fn common_encoder_tests<E: TokenEncoder>(encoder: &E) {
    let bos = SpecialToken::Bos.id();
    let eos = SpecialToken::Eos.id();
    let unk = SpecialToken::Unk.id();

    assert_eq!(encoder.encode("", true), vec![bos, eos]);
    assert!(encoder.encode("", false).is_empty());
    assert!(encoder.encode(" !? ", false).is_empty());

    let decoder = WordDecoder::new(encoder.vocab());
    for text in ["hello world", "The quick, brown FOX!", "  fox\tthe\nfox  "] {
        let tokens = encoder.encode(text, false);
        assert_eq!(decoder.decode(&tokens, true), normalize_text(text));

        let bracketed = encoder.encode(text, true);
        assert_eq!(bracketed.first(), Some(&bos));
        assert_eq!(bracketed.last(), Some(&eos));
        assert_eq!(&bracketed[1..bracketed.len() - 1], tokens.as_slice());
    }

    let tokens = encoder.encode("zzq", false);
    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|&t| t == unk));

    let batch = ["hello", "zzq world", ""];
    assert_eq!(
        encoder.encode_batch(&batch, true),
        batch
            .iter()
            .map(|s| encoder.encode(s, true))
            .collect::<Vec<_>>()
    );
}
