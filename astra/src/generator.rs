//! Random mnemonic generation.

use zeroize::Zeroizing;

#[cfg(feature = "rand")]
use crate::collab::OsEntropy;
use crate::collab::{Bip39WordList, EntropySource, WordList};
use crate::{Error, Language};

/// Entropy strengths (in bits) accepted by BIP-39.
pub const STRENGTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// Largest entropy buffer, for 256-bit strength.
const MAX_ENTROPY_LEN: usize = 32;

/// Map a word count to the matching entropy strength in bits.
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] unless `words` is 12, 15, 18, 21 or 24.
pub const fn strength_for_words(words: usize) -> Result<usize, Error> {
    match words {
        12 | 15 | 18 | 21 | 24 => Ok(words / 3 * 32),
        _ => Err(Error::InvalidWordCount(words)),
    }
}

/// Generates mnemonic phrases from secure entropy.
///
/// Owns only the strength check and the randomness request; word selection
/// and the checksum word come from the [`WordList`].
///
/// # Example
///
/// ```
/// use astra::{Language, MnemonicGenerator};
///
/// let generator = MnemonicGenerator::new(Language::English);
/// let phrase = generator.generate(128)?;
/// assert_eq!(phrase.split_whitespace().count(), 12);
/// # Ok::<(), astra::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MnemonicGenerator<W = Bip39WordList, E = DefaultEntropy> {
    language: Language,
    word_list: W,
    entropy: E,
}

/// Entropy source used by [`MnemonicGenerator::new`].
#[cfg(feature = "rand")]
pub type DefaultEntropy = OsEntropy;
/// Entropy source used by [`MnemonicGenerator::new`].
#[cfg(not(feature = "rand"))]
pub type DefaultEntropy = NoEntropy;

/// Placeholder entropy source used when the `rand` feature is off.
///
/// Every request fails; supply a real source with
/// [`MnemonicGenerator::with_collaborators`].
#[cfg(not(feature = "rand"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntropy;

#[cfg(not(feature = "rand"))]
impl EntropySource for NoEntropy {
    fn fill_bytes(&self, _buf: &mut [u8]) -> Result<(), Error> {
        Err(Error::Entropy("no entropy source configured".into()))
    }
}

impl MnemonicGenerator {
    /// Create a generator using the `bip39` word lists and OS entropy.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self::with_collaborators(language, Bip39WordList, DefaultEntropy::default())
    }
}

impl<W: WordList, E: EntropySource> MnemonicGenerator<W, E> {
    /// Create a generator with injected collaborators.
    #[must_use]
    pub const fn with_collaborators(language: Language, word_list: W, entropy: E) -> Self {
        Self {
            language,
            word_list,
            entropy,
        }
    }

    /// The language phrases are generated in.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Generate a phrase with `strength_bits` of entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrength`] if `strength_bits` is not one of
    /// [`STRENGTHS`], or any error raised by the collaborators.
    pub fn generate(&self, strength_bits: usize) -> Result<Zeroizing<String>, Error> {
        if !STRENGTHS.contains(&strength_bits) {
            return Err(Error::InvalidStrength(strength_bits));
        }

        let len = strength_bits / 8;
        let mut entropy = Zeroizing::new([0u8; MAX_ENTROPY_LEN]);
        self.entropy.fill_bytes(&mut entropy[..len])?;

        let phrase = self.word_list.to_mnemonic(&entropy[..len], self.language)?;
        tracing::debug!(
            language = %self.language,
            strength = strength_bits,
            "generated mnemonic"
        );
        Ok(phrase)
    }

    /// Generate a phrase with the given number of words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for counts other than 12, 15, 18,
    /// 21 or 24.
    pub fn with_word_count(&self, words: usize) -> Result<Zeroizing<String>, Error> {
        self.generate(strength_for_words(words)?)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Entropy source that repeats a fixed byte and counts requests.
    struct FixedEntropy {
        byte: u8,
        calls: Cell<usize>,
    }

    impl FixedEntropy {
        fn new(byte: u8) -> Self {
            Self {
                byte,
                calls: Cell::new(0),
            }
        }
    }

    impl EntropySource for FixedEntropy {
        fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), Error> {
            self.calls.set(self.calls.get() + 1);
            buf.fill(self.byte);
            Ok(())
        }
    }

    #[test]
    fn test_fixed_entropy_128() {
        let generator = MnemonicGenerator::with_collaborators(
            Language::English,
            Bip39WordList,
            FixedEntropy::new(0),
        );
        let phrase = generator.generate(128).unwrap();
        assert_eq!(
            phrase.as_str(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_fixed_entropy_256() {
        let generator = MnemonicGenerator::with_collaborators(
            Language::English,
            Bip39WordList,
            FixedEntropy::new(0xff),
        );
        let phrase = generator.generate(256).unwrap();
        assert_eq!(
            phrase.as_str(),
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote"
        );
    }

    #[test]
    fn test_all_strengths_word_counts() {
        let generator = MnemonicGenerator::with_collaborators(
            Language::English,
            Bip39WordList,
            FixedEntropy::new(7),
        );
        for (bits, words) in STRENGTHS.iter().zip([12, 15, 18, 21, 24]) {
            let phrase = generator.generate(*bits).unwrap();
            assert_eq!(phrase.split_whitespace().count(), words);
        }
    }

    #[test]
    fn test_invalid_strength_skips_entropy() {
        let entropy = FixedEntropy::new(0);
        let generator =
            MnemonicGenerator::with_collaborators(Language::English, Bip39WordList, &entropy);
        assert_eq!(
            generator.generate(100).unwrap_err(),
            Error::InvalidStrength(100)
        );
        assert_eq!(
            generator.generate(0).unwrap_err(),
            Error::InvalidStrength(0)
        );
        assert_eq!(
            generator.generate(512).unwrap_err(),
            Error::InvalidStrength(512)
        );
        assert_eq!(entropy.calls.get(), 0);
    }

    #[test]
    fn test_strength_for_words() {
        assert_eq!(strength_for_words(12).unwrap(), 128);
        assert_eq!(strength_for_words(15).unwrap(), 160);
        assert_eq!(strength_for_words(24).unwrap(), 256);
        assert_eq!(
            strength_for_words(13).unwrap_err(),
            Error::InvalidWordCount(13)
        );
    }

    #[test]
    fn test_generated_phrase_validates() {
        let generator = MnemonicGenerator::with_collaborators(
            Language::Korean,
            Bip39WordList,
            FixedEntropy::new(42),
        );
        let phrase = generator.with_word_count(18).unwrap();
        assert!(Bip39WordList.check(&phrase, Language::Korean));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_os_generate() {
        let generator = MnemonicGenerator::new(Language::English);
        let a = generator.generate(128).unwrap();
        let b = generator.generate(256).unwrap();
        assert_eq!(a.split_whitespace().count(), 12);
        assert_eq!(b.split_whitespace().count(), 24);
        assert!(Bip39WordList.check(&a, Language::English));
    }
}
