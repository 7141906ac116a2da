//! Word-list and entropy collaborators.
//!
//! Mnemonic generation and validation depend on two narrow capabilities:
//! checking/encoding phrases against a word list, and producing secure random
//! bytes. The defaults are [`Bip39WordList`] and [`OsEntropy`]; tests inject
//! fixed implementations.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::mnemonic::normalize;
use crate::{Error, Language};

/// Word-list and checksum validation plus entropy encoding.
pub trait WordList {
    /// Normalize `phrase` and report whether every word is in the list for
    /// `language` and the checksum verifies.
    fn check(&self, phrase: &str, language: Language) -> bool;

    /// Encode raw entropy as a phrase in `language`, checksum word included.
    fn to_mnemonic(&self, entropy: &[u8], language: Language) -> Result<Zeroizing<String>, Error>;
}

/// Source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), Error>;
}

/// [`WordList`] backed by the `bip39` crate tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bip39WordList;

impl Bip39WordList {
    /// Parse a phrase after NFKD normalization and whitespace collapsing.
    pub(crate) fn parse(phrase: &str, language: Language) -> Option<Mnemonic> {
        let normalized = Zeroizing::new(normalize(phrase));
        Mnemonic::parse_in_normalized(language.to_bip39(), &normalized).ok()
    }
}

impl WordList for Bip39WordList {
    fn check(&self, phrase: &str, language: Language) -> bool {
        Self::parse(phrase, language).is_some()
    }

    fn to_mnemonic(&self, entropy: &[u8], language: Language) -> Result<Zeroizing<String>, Error> {
        let mnemonic = Mnemonic::from_entropy_in(language.to_bip39(), entropy)
            .map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(Zeroizing::new(mnemonic.to_string()))
    }
}

/// [`EntropySource`] reading from the operating system RNG.
#[cfg(feature = "rand")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "rand")]
impl EntropySource for OsEntropy {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), Error> {
        getrandom::fill(buf).map_err(|e| Error::Entropy(e.to_string()))
    }
}

impl<T: WordList + ?Sized> WordList for &T {
    fn check(&self, phrase: &str, language: Language) -> bool {
        (**self).check(phrase, language)
    }

    fn to_mnemonic(&self, entropy: &[u8], language: Language) -> Result<Zeroizing<String>, Error> {
        (**self).to_mnemonic(entropy, language)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), Error> {
        (**self).fill_bytes(buf)
    }
}
