//! Error types for mnemonic and seed operations.

use core::fmt;

/// Errors that can occur while handling mnemonics and seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed UTF-8 or an empty required field.
    InvalidInput(String),
    /// The word list rejected the phrase (unknown word or bad checksum).
    InvalidMnemonic,
    /// Entropy strength in bits is not one of 128, 160, 192, 224 or 256.
    InvalidStrength(usize),
    /// Invalid word count for mnemonic.
    InvalidWordCount(usize),
    /// Language is not one of the supported word lists.
    UnsupportedLanguage(String),
    /// The secure randomness source failed.
    Entropy(String),
    /// Entropy could not be encoded into a phrase.
    Encoding(String),
    /// Mnemonic prefix is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// Mnemonic prefix does not match any word in the wordlist.
    UnknownPrefix(String),
    /// Mnemonic prefix matches multiple words in the wordlist.
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidMnemonic => {
                write!(f, "invalid mnemonic: unknown word or checksum mismatch")
            }
            Self::InvalidStrength(bits) => {
                write!(f, "invalid strength {bits}, must be one of 128, 160, 192, 224, or 256 bits")
            }
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::UnsupportedLanguage(lang) => {
                write!(f, "unsupported mnemonic language \"{lang}\"")
            }
            Self::Entropy(msg) => write!(f, "entropy source failed: {msg}"),
            Self::Encoding(msg) => write!(f, "mnemonic encoding failed: {msg}"),
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any BIP-39 word")
            }
            Self::AmbiguousPrefix { prefix, candidates } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {}

/// A convenient Result type alias for astra operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidStrength(100).to_string(),
            "invalid strength 100, must be one of 128, 160, 192, 224, or 256 bits"
        );
        assert_eq!(
            Error::UnsupportedLanguage("klingon".into()).to_string(),
            "unsupported mnemonic language \"klingon\""
        );
        assert_eq!(
            Error::AmbiguousPrefix {
                prefix: "ab".into(),
                candidates: vec!["abandon".into(), "ability".into()],
            }
            .to_string(),
            "prefix \"ab\" is ambiguous, matches: abandon, ability"
        );
    }
}
