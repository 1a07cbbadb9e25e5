//! # Vocabulary Record

use std::{
    collections::BTreeMap,
    io::{Read, Write},
};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    WBResult,
    WordbankError,
    types::TokenId,
    vocab::{SpecialToken, Vocabulary},
};

/// The persisted form of a [`Vocabulary`].
///
/// Field names serialize in camelCase: `vocab`, `specialTokens`, `nextTokenId`.
///
/// `special_tokens` and `next_token_id` are informational; [`to_vocabulary`](Self::to_vocabulary)
/// recomputes both from `vocab`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabRecord {
    /// The full ``{ token -> id }`` mapping, specials included.
    pub vocab: BTreeMap<String, TokenId>,

    /// The reserved special tokens present in `vocab`.
    ///
    /// `None` marks a legacy record written without this field.
    #[serde(default)]
    pub special_tokens: Option<BTreeMap<String, TokenId>>,

    /// One past the maximum id in `vocab`.
    #[serde(default)]
    pub next_token_id: TokenId,
}

impl VocabRecord {
    /// Capture the state of a vocabulary.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Self {
        Self {
            vocab: vocab.to_ordered_map(),
            special_tokens: Some(vocab.special_tokens()),
            next_token_id: vocab.next_id(),
        }
    }

    /// Rebuild a vocabulary from this record.
    ///
    /// The allocation counter is recomputed from `vocab`; a mismatched
    /// `nextTokenId` is ignored.
    ///
    /// For legacy records (no `specialTokens`), special tokens missing
    /// from `vocab` are restored at their fixed ids when those ids are free.
    ///
    /// ## Errors
    /// [`WordbankError::MalformedVocabulary`] if two tokens share an id.
    pub fn to_vocabulary(&self) -> WBResult<Vocabulary> {
        let mut vocab = Vocabulary::from_forward(
            self.vocab
                .iter()
                .map(|(token, &id)| (token.clone(), id)),
        )?;

        if self.next_token_id != vocab.next_id() {
            log::debug!(
                "ignoring recorded nextTokenId {}; recomputed {}",
                self.next_token_id,
                vocab.next_id()
            );
        }

        if self.special_tokens.is_none() {
            for special in SpecialToken::iter() {
                if vocab.contains_token(special.as_str())
                    || vocab.lookup_token(special.id()).is_some()
                {
                    continue;
                }
                log::warn!(
                    "restoring missing special token {} at id {}",
                    special,
                    special.id()
                );
                vocab.insert_with_id(special.as_str(), special.id() as i64)?;
            }
        }

        Ok(vocab)
    }

    /// Parse a record from a JSON string.
    ///
    /// ## Errors
    /// [`WordbankError::MalformedVocabulary`] on any shape or value error,
    /// including non-integer, negative, or out-of-range ids.
    pub fn from_json_str(json: &str) -> WBResult<Self> {
        serde_json::from_str(json).map_err(malformed)
    }

    /// Parse a record from a JSON stream.
    ///
    /// ## Errors
    /// [`WordbankError::Io`] if reading fails;
    /// [`WordbankError::MalformedVocabulary`] if the content is invalid.
    pub fn from_reader<R: Read>(reader: R) -> WBResult<Self> {
        serde_json::from_reader(reader).map_err(|err| {
            if err.is_io() {
                WordbankError::Io(err.into())
            } else {
                malformed(err)
            }
        })
    }

    /// Render this record as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> WBResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| WordbankError::Io(err.into()))
    }

    /// Write this record as pretty-printed JSON.
    ///
    /// ## Errors
    /// [`WordbankError::Io`] if writing fails.
    pub fn write_json<W: Write>(
        &self,
        mut writer: W,
    ) -> WBResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|err| WordbankError::Io(err.into()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn malformed(err: serde_json::Error) -> WordbankError {
    WordbankError::MalformedVocabulary(err.to_string())
}
