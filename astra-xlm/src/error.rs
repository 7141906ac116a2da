//! Error types for Stellar key derivation and encoding.
//!
//! This module defines all errors that can occur during Stellar account
//! derivation, StrKey encoding and keypair import.

use core::fmt;

/// Errors that can occur during Stellar wallet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Account index does not fit in 31 bits.
    InvalidIndex(u32),
    /// StrKey has a bad length, version byte or checksum.
    InvalidStrKey,
    /// Invalid hex string format.
    InvalidHex,
    /// Raw key has the wrong length.
    InvalidKeyLength(usize),
    /// Ed25519 signature did not verify.
    Signature,
    /// Key derivation failed with details.
    Derivation(String),
    /// Mnemonic or seed error from the core crate.
    Core(astra::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex(index) => {
                write!(f, "invalid account index {index}, must be below 2^31")
            }
            Self::InvalidStrKey => write!(f, "invalid strkey"),
            Self::InvalidHex => write!(f, "invalid hex string"),
            Self::InvalidKeyLength(len) => write!(f, "expected 32 bytes, got {len}"),
            Self::Signature => write!(f, "signature verification failed"),
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<astra::Error> for Error {
    fn from(err: astra::Error) -> Self {
        Self::Core(err)
    }
}
