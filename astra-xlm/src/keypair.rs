//! Stellar ed25519 keypair.
//!
//! Expands a 32-byte secret seed (from SEP-0005 derivation, an `S...`
//! StrKey, or the OS RNG) into an ed25519 signing key.

use core::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
#[cfg(feature = "rand")]
use rand_core::OsRng;
use zeroize::Zeroizing;

use crate::{Error, strkey};

/// A Stellar account keypair.
///
/// # Example
///
/// ```
/// use astra_xlm::Keypair;
///
/// let keypair = Keypair::from_secret_seed(
///     "SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMN",
/// )?;
/// assert_eq!(
///     keypair.account_id(),
///     "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6"
/// );
/// # Ok::<(), astra_xlm::Error>(())
/// ```
#[derive(Clone)]
pub struct Keypair {
    /// Ed25519 signing key.
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    ///
    /// Uses the operating system's cryptographically secure random number generator.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Create a keypair from a raw 32-byte secret seed.
    #[must_use]
    pub fn from_raw_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create a keypair from an `S...` secret seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrKey`] if the string is not a valid secret seed.
    pub fn from_secret_seed(secret: &str) -> Result<Self, Error> {
        let seed = strkey::decode_secret_seed(secret.trim())?;
        Ok(Self::from_raw_seed(&seed))
    }

    /// Create a keypair from a hex-encoded 32-byte secret seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex is invalid or key length is wrong.
    pub fn from_hex(hex_key: &str) -> Result<Self, Error> {
        let hex_key = hex_key.strip_prefix("0x").unwrap_or(hex_key);
        let bytes = Zeroizing::new(hex::decode(hex_key).map_err(|_| Error::InvalidHex)?);

        let seed: Zeroizing<[u8; 32]> = Zeroizing::new(
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| Error::InvalidKeyLength(bytes.len()))?,
        );
        Ok(Self::from_raw_seed(&seed))
    }

    /// Get the `G...` account id.
    #[inline]
    #[must_use]
    pub fn account_id(&self) -> String {
        strkey::encode_account_id(self.verifying_key().as_bytes())
    }

    /// Get the `S...` secret seed (zeroized on drop).
    #[inline]
    #[must_use]
    pub fn secret_seed(&self) -> Zeroizing<String> {
        strkey::encode_secret_seed(self.signing_key.as_bytes())
    }

    /// Get the raw 32-byte secret seed (zeroized on drop).
    #[inline]
    #[must_use]
    pub fn raw_secret_seed(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(*self.signing_key.as_bytes())
    }

    /// Get the raw 32-byte public key.
    #[inline]
    #[must_use]
    pub fn public_key(&self) -> [u8; 32] {
        self.verifying_key().to_bytes()
    }

    /// Get the public key in hex format.
    #[inline]
    #[must_use]
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key().as_bytes())
    }

    /// Sign a message.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify a signature made by this keypair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Signature`] if the signature does not verify.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> Result<(), Error> {
        self.verifying_key()
            .verify(message, &Signature::from_bytes(signature))
            .map_err(|_| Error::Signature)
    }

    fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("account_id", &self.account_id())
            .finish_non_exhaustive()
    }
}
