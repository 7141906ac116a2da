//! Stellar account derivation from a mnemonic wallet.

use astra::Wallet;
use zeroize::Zeroizing;

use crate::Error;
use crate::keypair::Keypair;
use crate::slip10::{self, DerivedKey, FIRST_HARDENED_INDEX};

/// A derived Stellar account with associated keys.
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    /// Account index.
    pub index: u32,
    /// Derivation path used (e.g., `m/44'/148'/0'`).
    pub path: String,
    /// `G...` account id.
    pub account_id: String,
    /// `S...` secret seed (zeroized on drop).
    pub secret_seed: Zeroizing<String>,
    /// Raw secret seed in hex format (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// Public key in hex format.
    pub public_key_hex: String,
}

/// Stellar account deriver over a mnemonic [`Wallet`].
///
/// Each call stretches the wallet seed afresh and walks
/// `m/44'/148'/index'`; no key material is kept between calls.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Stellar deriver from a wallet.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the raw 32-byte ed25519 secret seed for an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= 2^31`.
    pub fn derive_raw(&self, index: u32) -> Result<Zeroizing<[u8; 32]>, Error> {
        slip10::derive(self.wallet.seed().as_bytes(), index)
    }

    /// Derive the [`Keypair`] for an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= 2^31`.
    pub fn derive_keypair(&self, index: u32) -> Result<Keypair, Error> {
        let raw = self.derive_raw(index)?;
        Ok(Keypair::from_raw_seed(&raw))
    }

    /// Derive a Stellar account at `m/44'/148'/index'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= 2^31`.
    pub fn derive(&self, index: u32) -> Result<DerivedAccount, Error> {
        let raw = self.derive_raw(index)?;
        Ok(Self::account(index, &raw))
    }

    /// Derive multiple accounts in sequence.
    ///
    /// # Arguments
    ///
    /// * `start` - First account index
    /// * `count` - Number of accounts to derive
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `start >= 2^31` or the range
    /// reaches past `2^31 - 1`, even when `count` is zero.
    pub fn derive_many(&self, start: u32, count: u32) -> Result<Vec<DerivedAccount>, Error> {
        if start >= FIRST_HARDENED_INDEX {
            return Err(Error::InvalidIndex(start));
        }
        let end = start
            .checked_add(count)
            .filter(|end| *end <= FIRST_HARDENED_INDEX)
            .ok_or_else(|| Error::InvalidIndex(start.saturating_add(count - 1)))?;

        // One seed for the whole batch.
        let seed = self.wallet.seed();
        (start..end)
            .map(|index| {
                slip10::derive(seed.as_bytes(), index).map(|raw| Self::account(index, &raw))
            })
            .collect()
    }

    fn account(index: u32, raw: &[u8; 32]) -> DerivedAccount {
        let keypair = Keypair::from_raw_seed(raw);
        let path = DerivedKey::format_path(index);
        let account_id = keypair.account_id();
        tracing::debug!(index, path = %path, account_id = %account_id, "derived stellar account");

        DerivedAccount {
            index,
            path,
            account_id,
            secret_seed: keypair.secret_seed(),
            private_key_hex: Zeroizing::new(hex::encode(raw)),
            public_key_hex: keypair.public_key_hex(),
        }
    }
}
