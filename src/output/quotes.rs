// Quotation-aware masks.
//
// Matches that sit inside double quotes are usually attributed reuse and
// get their own highlight colour. This is purely presentational: it only
// splits the sample's match mask, it never changes what matched.

use crate::text::tokenizer::Token;
use crate::text::vocabulary::is_word_char;

/// Mark tokens whose word lies between an opening and closing `"`.
///
/// If the document has an odd number of `"` characters the pairing is
/// ambiguous and every position is false.
pub fn quote_mask(tokens: &[Token]) -> Vec<bool> {
    let quote_count: usize = tokens.iter().map(|t| t.text.matches('"').count()).sum();
    if quote_count % 2 != 0 {
        return vec![false; tokens.len()];
    }

    let mut inside = false;
    tokens
        .iter()
        .map(|token| {
            let mut quoted = false;
            for c in token.text.chars() {
                if c == '"' {
                    inside = !inside;
                } else if inside && is_word_char(c) {
                    quoted = true;
                }
            }
            quoted
        })
        .collect()
}

/// Split a match mask by a quote mask into `(unquoted, quoted)` matches.
///
/// The result has the match mask's length; missing quote positions count
/// as unquoted.
pub fn layer_masks(matches: &[bool], quotes: &[bool]) -> (Vec<bool>, Vec<bool>) {
    matches
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            let q = quotes.get(i).copied().unwrap_or(false);
            (m && !q, m && q)
        })
        .unzip()
}
