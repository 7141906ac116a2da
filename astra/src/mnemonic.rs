//! Mnemonic phrase helpers.
//!
//! Validation against a word list and prefix-based word expansion.
//!
//! # Prefix Expansion
//!
//! Every word in the BIP-39 English list is identified by its first four
//! characters, so users can type `"illn spik retr ..."` and have each token
//! expanded to its full word before the phrase is validated.
//!
//! # Example
//!
//! ```
//! use astra::mnemonic;
//!
//! let expanded = mnemonic::expand("illn spik retr trut geni cloc brai pass fit cave barg toe")?;
//! assert_eq!(
//!     expanded,
//!     "illness spike retreat truth genius clock brain pass fit cave bargain toe"
//! );
//! assert!(mnemonic::check(&expanded, astra::Language::English));
//! # Ok::<(), astra::Error>(())
//! ```

use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::collab::{Bip39WordList, WordList};
use crate::{Error, Language};

/// Minimum prefix length, in characters, for a non-exact token.
const MIN_PREFIX_LEN: usize = 4;

/// Check a phrase against the `bip39` word list for `language`.
#[inline]
pub fn check(phrase: &str, language: Language) -> bool {
    Bip39WordList.check(phrase, language)
}

/// NFKD-normalize a phrase and collapse runs of whitespace to one space.
pub fn normalize(phrase: &str) -> String {
    let normalized = Zeroizing::new(phrase.nfkd().collect::<String>());
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Expand abbreviated words in an English phrase to their full form.
///
/// Each whitespace-separated token is matched against the word list:
/// an exact match is kept, a prefix of at least four characters that names
/// exactly one word is expanded, anything else is an error.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand(phrase: &str) -> Result<String, Error> {
    expand_in(Language::English, phrase)
}

/// Expand abbreviated words using the word list for `language`.
///
/// See [`expand`] for details.
pub fn expand_in(language: Language, phrase: &str) -> Result<String, Error> {
    let word_list = language.word_list();
    let normalized = Zeroizing::new(normalize(phrase));

    let words = normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| resolve_token(word_list, token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(words.join(" "))
}

/// Resolve a single token to its full word.
fn resolve_token(
    word_list: &'static [&'static str; 2048],
    token: &str,
) -> Result<&'static str, Error> {
    // Word lists are not all sorted by code point, so scan linearly.
    let exact = word_list
        .iter()
        .copied()
        .find(|word| word.nfkd().eq(token.chars()));
    if let Some(word) = exact {
        return Ok(word);
    }

    if token.chars().count() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.into(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let matches: Vec<&'static str> = word_list
        .iter()
        .copied()
        .filter(|word| word.nfkd().collect::<String>().starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Err(Error::UnknownPrefix(token.into())),
        [word] => Ok(*word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.into(),
            candidates: matches.iter().map(|w| (*w).into()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_12: &str =
        "illness spike retreat truth genius clock brain pass fit cave bargain toe";

    #[test]
    fn full_words_unchanged() {
        assert_eq!(expand(FULL_12).unwrap(), FULL_12);
    }

    #[test]
    fn four_letter_prefix_expansion() {
        let abbreviated = "illn spik retr trut geni cloc brai pass fit cave barg toe";
        assert_eq!(expand(abbreviated).unwrap(), FULL_12);
    }

    #[test]
    fn longer_prefix_and_extra_whitespace() {
        let input = "  illne   spike retrea truth\tgeniu clock brain pass fit cave bargai toe ";
        assert_eq!(expand(input).unwrap(), FULL_12);
    }

    #[test]
    fn prefix_too_short_rejected() {
        let result = expand("il spike");
        assert!(matches!(result, Err(Error::PrefixTooShort { min_len: 4, .. })));
    }

    #[test]
    fn unknown_prefix_rejected() {
        let result = expand("illn zzzz");
        assert_eq!(result.unwrap_err(), Error::UnknownPrefix("zzzz".into()));
    }

    #[test]
    fn exact_short_words_accepted() {
        assert_eq!(expand("zoo art ice fit").unwrap(), "zoo art ice fit");
    }

    #[test]
    fn check_accepts_valid_and_rejects_unknown_word() {
        assert!(check(FULL_12, Language::English));
        let bad = "illness spike retreat truth genius clock brain pass fit cave bargain qwerty";
        assert!(!check(bad, Language::English));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize(" a \t b\n c "), "a b c");
    }

    #[test]
    fn expand_in_french() {
        let word = Language::French.word_list()[0];
        assert_eq!(expand_in(Language::French, word).unwrap(), word);
    }
}
