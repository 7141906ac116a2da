//! SLIP-0010 Ed25519 key derivation.
//!
//! Implements SLIP-0010 for deriving Ed25519 keys from a seed, restricted to
//! the Stellar account path `m/44'/148'/account'` (SEP-0005).
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Offset added to every path segment; Ed25519 derivation is hardened only.
pub const FIRST_HARDENED_INDEX: u32 = 0x8000_0000;

/// BIP-44 purpose segment.
pub const PURPOSE: u32 = 44;

/// SLIP-0044 coin type registered for Stellar.
pub const COIN_TYPE: u32 = 148;

/// SLIP-0010 derived key pair.
pub struct DerivedKey {
    /// 32-byte private key.
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive master key from seed using SLIP-0010.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE)
            .map_err(|e| Error::Derivation(e.to_string()))?;
        mac.update(seed);
        Ok(Self::split(mac))
    }

    /// Derive child key at hardened index.
    ///
    /// `index` is the unhardened value; [`FIRST_HARDENED_INDEX`] is added here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= 2^31`.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = hardened(index)?;

        let mut mac = HmacSha512::new_from_slice(self.chain_code.as_slice())
            .map_err(|e| Error::Derivation(e.to_string()))?;

        // 0x00 || private_key || ser32(index)
        mac.update(&[0x00]);
        mac.update(self.private_key.as_slice());
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(mac))
    }

    /// Derive the key at `m/44'/148'/account'`.
    pub fn derive_stellar_path(seed: &[u8], account: u32) -> Result<Self, Error> {
        // Reject before spending any HMAC rounds.
        hardened(account)?;

        let master = Self::from_seed(seed)?;
        [PURPOSE, COIN_TYPE, account]
            .into_iter()
            .try_fold(master, |parent, segment| parent.derive_hardened(segment))
    }

    /// Format the derivation path string.
    pub fn format_path(account: u32) -> String {
        format!("m/{PURPOSE}'/{COIN_TYPE}'/{account}'")
    }

    /// Split an HMAC-SHA512 output into key (left) and chain code (right).
    fn split(mac: HmacSha512) -> Self {
        let mut result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);
        result.as_mut_slice().zeroize();

        Self {
            private_key,
            chain_code,
        }
    }
}

/// Add the hardened offset, rejecting indices that would overflow it.
const fn hardened(index: u32) -> Result<u32, Error> {
    if index >= FIRST_HARDENED_INDEX {
        Err(Error::InvalidIndex(index))
    } else {
        Ok(FIRST_HARDENED_INDEX + index)
    }
}

/// Derive the 32-byte Ed25519 secret seed for a Stellar account.
///
/// Walks `m/44'/148'/account'` from a 64-byte BIP-39 seed.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] if `account >= 2^31`.
pub fn derive(seed: &[u8; 64], account: u32) -> Result<Zeroizing<[u8; 32]>, Error> {
    let key = DerivedKey::derive_stellar_path(seed, account)?;
    Ok(key.private_key)
}
