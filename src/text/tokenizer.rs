// Word/separator tokenization.
//
// Text is split on runs of whitespace and dash-like characters, keeping the
// separator runs, then merged so every token holds exactly one word plus the
// material around it. Concatenating the surface text of all tokens always
// reproduces the input byte for byte, which is what lets the renderer wrap
// tokens in highlight markers without disturbing the original layout.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::vocabulary::{is_word_char, normalize_word};

/// Whitespace (ASCII plus the Unicode space separators) and the three dash
/// variants. regex-lite's `\s` is ASCII-only, so the Unicode spaces are listed.
const SEPARATOR_PATTERN: &str =
    r"[\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}—–-]+";

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEPARATOR_PATTERN).expect("separator pattern compiles"));

/// One unit of a tokenized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lower-cased word content, stripped of everything but word characters
    /// and apostrophes. Empty for a separator-only token.
    pub word: String,
    /// Exact surface text, including the attached whitespace and punctuation.
    pub text: String,
}

impl Token {
    /// True when the token carries no matchable word.
    pub fn is_separator_only(&self) -> bool {
        self.word.is_empty()
    }
}

/// A piece of the delimiter-preserving split.
#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Separator(&'a str),
    Chunk(&'a str),
}

/// Split on separator runs while keeping them, dropping empty pieces.
fn split_keep_separators(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in SEPARATORS.find_iter(text) {
        if m.start() > last {
            pieces.push(Piece::Chunk(&text[last..m.start()]));
        }
        pieces.push(Piece::Separator(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        pieces.push(Piece::Chunk(&text[last..]));
    }

    pieces
}

/// Tokenize a document.
///
/// Each word-bearing chunk starts a new token. Separator runs and chunks with
/// no word characters (a lone `!`, `...`) attach to the preceding token; any
/// such material before the first word is carried into the first token. A
/// document with no words at all yields a single separator-only token, and
/// an empty document yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pending = String::new();

    for piece in split_keep_separators(text) {
        match piece {
            Piece::Chunk(chunk) if chunk.chars().any(is_word_char) => {
                let mut surface = std::mem::take(&mut pending);
                surface.push_str(chunk);
                tokens.push(Token {
                    word: normalize_word(chunk),
                    text: surface,
                });
            }
            Piece::Chunk(fragment) | Piece::Separator(fragment) => match tokens.last_mut() {
                Some(last) => last.text.push_str(fragment),
                None => pending.push_str(fragment),
            },
        }
    }

    if !pending.is_empty() {
        tokens.push(Token {
            word: String::new(),
            text: pending,
        });
    }

    tokens
}

/// Rebuild the source text from its tokens.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
