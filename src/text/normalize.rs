// Punctuation normalization applied before tokenization.
//
// Curly quotes become their straight equivalents so that `don’t` and
// `don't` normalize to the same word and the quote detector only has to
// look for `"`.

use std::sync::LazyLock;

use regex_lite::Regex;

static CURLY_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[“”]").expect("double quote pattern compiles"));
static CURLY_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[‘’]").expect("single quote pattern compiles"));

/// Replace curly double and single quotes with straight ones.
pub fn normalize_punctuation(text: &str) -> String {
    let singles = CURLY_SINGLE.replace_all(text, "'");
    CURLY_DOUBLE.replace_all(&singles, "\"").into_owned()
}
