//! Supported mnemonic word-list languages.
//!
//! The set is closed: parsing any other name fails with
//! [`Error::UnsupportedLanguage`] before a word list is ever touched.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Word-list language for mnemonic phrases.
///
/// These are the BIP-39 word lists that Stellar wallets accept for
/// SEP-0005 account recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English word list (the default).
    #[default]
    English,
    /// Japanese word list.
    Japanese,
    /// French word list.
    French,
    /// Spanish word list.
    Spanish,
    /// Italian word list.
    Italian,
    /// Korean word list.
    Korean,
    /// Simplified Chinese word list.
    ChineseSimplified,
    /// Traditional Chinese word list.
    ChineseTraditional,
}

impl Language {
    /// Get the canonical identifier, e.g. `chinese_simplified`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::French => "french",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::Korean => "korean",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
        }
    }

    /// Get all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::English,
            Self::Japanese,
            Self::French,
            Self::Spanish,
            Self::Italian,
            Self::Korean,
            Self::ChineseSimplified,
            Self::ChineseTraditional,
        ]
    }

    /// The matching [`bip39::Language`].
    #[must_use]
    pub const fn to_bip39(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Japanese => bip39::Language::Japanese,
            Self::French => bip39::Language::French,
            Self::Spanish => bip39::Language::Spanish,
            Self::Italian => bip39::Language::Italian,
            Self::Korean => bip39::Language::Korean,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
        }
    }

    /// The 2048-word list for this language.
    #[inline]
    #[must_use]
    pub fn word_list(self) -> &'static [&'static str; 2048] {
        self.to_bip39().word_list()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Language> for bip39::Language {
    fn from(language: Language) -> Self {
        language.to_bip39()
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|language| language.as_str() == name)
            .ok_or_else(|| Error::UnsupportedLanguage(s.into()))
    }
}

impl TryFrom<&str> for Language {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!(
            "chinese_simplified".parse::<Language>().unwrap(),
            Language::ChineseSimplified
        );
        assert_eq!(
            "chinese-traditional".parse::<Language>().unwrap(),
            Language::ChineseTraditional
        );
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = "czech".parse::<Language>().unwrap_err();
        assert_eq!(err, Error::UnsupportedLanguage("czech".into()));
        assert!(Language::try_from("").is_err());
    }

    #[test]
    fn test_roundtrip_names() {
        for language in Language::all() {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), *language);
            assert_eq!(language.to_string(), language.as_str());
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.word_list()[0], "abandon");
    }
}
