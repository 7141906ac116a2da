//! BIP-39 seed stretching.
//!
//! `seed = PBKDF2-HMAC-SHA512(NFKD(mnemonic), "mnemonic" || NFKD(passphrase), 2048, 64)`
//!
//! The mnemonic is expected to be validated already; only NFKD normalization
//! is applied here, so the output is bit-exact with every other BIP-39
//! implementation for the same input string.

use core::fmt;

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::Error;

/// PBKDF2 iteration count mandated by BIP-39.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/// Salt prefix that is prepended to the passphrase.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte BIP-39 seed (zeroized on drop).
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// Wrap raw seed bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Get the seed bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Stretch a mnemonic and passphrase into a 64-byte seed.
///
/// `passphrase` may be empty.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the mnemonic is empty or whitespace only.
pub fn stretch(mnemonic: &str, passphrase: &str) -> Result<Seed, Error> {
    if mnemonic.trim().is_empty() {
        return Err(Error::InvalidInput("mnemonic must not be empty".into()));
    }
    Ok(pbkdf2_seed(mnemonic, passphrase))
}

/// Stretch raw UTF-8 bytes, see [`stretch`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either input is not valid UTF-8 or the
/// mnemonic is empty.
pub fn stretch_utf8(mnemonic: &[u8], passphrase: &[u8]) -> Result<Seed, Error> {
    let mnemonic = core::str::from_utf8(mnemonic)
        .map_err(|e| Error::InvalidInput(format!("mnemonic is not valid UTF-8: {e}")))?;
    let passphrase = core::str::from_utf8(passphrase)
        .map_err(|e| Error::InvalidInput(format!("passphrase is not valid UTF-8: {e}")))?;
    stretch(mnemonic, passphrase)
}

/// PBKDF2 over already-checked inputs.
pub(crate) fn pbkdf2_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password = Zeroizing::new(mnemonic.nfkd().collect::<String>());
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.extend(passphrase.nfkd());

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        seed.as_mut_slice(),
    );
    tracing::trace!(rounds = PBKDF2_ROUNDS, "stretched mnemonic into seed");
    Seed(seed)
}
