// Vocabulary encoding — normalized words to small integer ids.
//
// The vocabulary is built from the reference document only, in first-seen
// order. Sample words the reference never used, and tokens with no word
// content, encode to `UNMATCHED`, which no assigned id can equal.

use std::collections::HashMap;

use super::tokenizer::Token;

/// Integer id of a normalized word.
pub type WordId = usize;

/// Encoding for tokens that can never take part in a match.
///
/// Ids are assigned from 0 upward and a `HashMap` cannot hold `usize::MAX`
/// entries, so no assigned id ever reaches this value. The matchers still
/// exclude it explicitly: two `UNMATCHED` positions are never equal.
pub const UNMATCHED: WordId = WordId::MAX;

/// Word characters as the tokenizer and normalizer see them.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lower-case and keep only word characters and apostrophes.
pub fn normalize_word(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c == '\'')
        .collect()
}

/// Mapping from normalized word to id, scoped to a single detection run.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Build a vocabulary from the reference document's tokens.
    pub fn build(reference: &[Token]) -> Self {
        Self::from_reference(reference).0
    }

    /// Build a vocabulary from the reference and return the reference's
    /// encoding alongside it. The vocabulary is read-only from here on.
    pub fn from_reference(reference: &[Token]) -> (Self, Vec<WordId>) {
        let mut vocabulary = Self::default();
        let encoded = vocabulary.encode_inserting(reference);
        (vocabulary, encoded)
    }

    /// Number of distinct words seen.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look up the id of an already-normalized word.
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Unseen words get the next sequential id.
    fn encode_inserting(&mut self, tokens: &[Token]) -> Vec<WordId> {
        tokens
            .iter()
            .map(|token| {
                if token.is_separator_only() {
                    return UNMATCHED;
                }
                let next = self.ids.len();
                *self.ids.entry(token.word.clone()).or_insert(next)
            })
            .collect()
    }

    /// Encode the sample: words missing from the vocabulary become `UNMATCHED`.
    pub fn encode(&self, tokens: &[Token]) -> Vec<WordId> {
        tokens
            .iter()
            .map(|token| {
                if token.is_separator_only() {
                    UNMATCHED
                } else {
                    self.id(&token.word).unwrap_or(UNMATCHED)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenizer::tokenize;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("\"Hello,"), "hello");
        assert_eq!(normalize_word("Don't!"), "don't");
        assert_eq!(normalize_word("Éclair"), "éclair");
        assert_eq!(normalize_word("..."), "");
    }

    #[test]
    fn test_first_seen_order() {
        let reference = tokenize("the cat saw the dog");
        let (vocabulary, ids) = Vocabulary::from_reference(&reference);
        assert_eq!(ids, vec![0, 1, 2, 0, 3]);
        assert_eq!(vocabulary.len(), 4);
    }

    #[test]
    fn test_sample_misses_encode_unmatched() {
        let vocabulary = Vocabulary::build(&tokenize("alpha beta"));
        let ids = vocabulary.encode(&tokenize("Beta gamma ALPHA"));
        assert_eq!(ids, vec![1, UNMATCHED, 0]);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_build_matches_from_reference() {
        let reference = tokenize("b a c a");
        let (vocabulary, ids) = Vocabulary::from_reference(&reference);
        assert_eq!(ids, vocabulary.encode(&reference));
        assert_eq!(Vocabulary::build(&reference).len(), vocabulary.len());
    }

    #[test]
    fn test_separator_only_token_is_unmatched() {
        let (vocabulary, ids) = Vocabulary::from_reference(&tokenize(" -- "));
        assert_eq!(ids, vec![UNMATCHED]);
        assert!(vocabulary.is_empty());
    }
}
