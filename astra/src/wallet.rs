//! Mnemonic wallet facade.

use core::fmt;

use zeroize::Zeroizing;

use crate::collab::{Bip39WordList, WordList};
#[cfg(feature = "rand")]
use crate::generator::MnemonicGenerator;
use crate::mnemonic::normalize;
use crate::seed::{Seed, pbkdf2_seed};
use crate::{Error, Language};

/// A validated mnemonic and passphrase that Stellar accounts derive from.
///
/// # Passphrase Support
///
/// The optional BIP39 passphrase (sometimes called the "25th word") is mixed
/// into the seed salt; the same mnemonic with a different passphrase yields
/// unrelated accounts.
///
/// The seed is never cached: [`Wallet::seed`] runs PBKDF2 on every call and
/// the returned [`Seed`] is zeroized when dropped.
pub struct Wallet {
    /// Normalized mnemonic phrase.
    mnemonic: Zeroizing<String>,
    /// BIP39 passphrase, empty when none was given.
    passphrase: Zeroizing<String>,
    /// Word-list language of the mnemonic.
    language: Language,
}

impl Wallet {
    /// Generate a new English wallet with a random mnemonic.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    /// * `passphrase` - Optional BIP39 passphrase for additional security
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid or the OS RNG fails.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        Self::generate_in(Language::English, word_count, passphrase)
    }

    /// Generate a new wallet with a random mnemonic in `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid or the OS RNG fails.
    #[cfg(feature = "rand")]
    pub fn generate_in(
        language: Language,
        word_count: usize,
        passphrase: Option<&str>,
    ) -> Result<Self, Error> {
        let phrase = MnemonicGenerator::new(language).with_word_count(word_count)?;
        Self::from_mnemonic_in(language, &phrase, passphrase)
    }

    /// Create an English wallet from raw entropy bytes.
    ///
    /// # Arguments
    ///
    /// * `entropy` - Raw entropy bytes (16, 20, 24, 28, or 32 bytes for 12-24 words)
    /// * `passphrase` - Optional BIP39 passphrase for additional security
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        Self::from_entropy_in(Language::English, entropy, passphrase)
    }

    /// Create a wallet in `language` from raw entropy bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy_in(
        language: Language,
        entropy: &[u8],
        passphrase: Option<&str>,
    ) -> Result<Self, Error> {
        let phrase = Bip39WordList.to_mnemonic(entropy, language)?;
        Self::from_mnemonic_in(language, &phrase, passphrase)
    }

    /// Create a wallet from an English mnemonic phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the phrase fails word-list or
    /// checksum validation.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        Self::from_mnemonic_in(Language::English, phrase, passphrase)
    }

    /// Create a wallet from a mnemonic phrase in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the phrase fails word-list or
    /// checksum validation.
    pub fn from_mnemonic_in(
        language: Language,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<Self, Error> {
        Self::from_mnemonic_with(&Bip39WordList, language, phrase, passphrase)
    }

    /// Create a wallet, validating the phrase with a custom [`WordList`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty phrase and
    /// [`Error::InvalidMnemonic`] when `word_list` rejects it.
    pub fn from_mnemonic_with<W: WordList + ?Sized>(
        word_list: &W,
        language: Language,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<Self, Error> {
        let mnemonic = Zeroizing::new(normalize(phrase));
        if mnemonic.is_empty() {
            return Err(Error::InvalidInput("mnemonic must not be empty".into()));
        }
        if !word_list.check(&mnemonic, language) {
            return Err(Error::InvalidMnemonic);
        }

        let wallet = Self {
            mnemonic,
            passphrase: Zeroizing::new(passphrase.unwrap_or_default().into()),
            language,
        };
        tracing::debug!(
            language = %language,
            words = wallet.word_count(),
            passphrase = wallet.has_passphrase(),
            "loaded mnemonic"
        );
        Ok(wallet)
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct all derived keys.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Word-list language of the mnemonic.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Stretch the mnemonic and passphrase into a fresh seed.
    ///
    /// Runs 2048 PBKDF2 rounds on every call.
    #[must_use]
    pub fn seed(&self) -> Seed {
        pbkdf2_seed(&self.mnemonic, &self.passphrase)
    }

    /// Check if a non-empty passphrase is mixed into the seed.
    #[must_use]
    pub fn has_passphrase(&self) -> bool {
        !self.passphrase.is_empty()
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("language", &self.language)
            .field("words", &self.word_count())
            .field("has_passphrase", &self.has_passphrase())
            .finish_non_exhaustive()
    }
}
