//! Stellar StrKey encoding.
//!
//! `base32(version || payload || crc16_xmodem_le(version || payload))`,
//! RFC 4648 alphabet without padding. Account ids start with `G`, secret
//! seeds with `S`.

use crc::{CRC_16_XMODEM, Crc};
use data_encoding::BASE32_NOPAD;
use zeroize::Zeroizing;

use crate::Error;

/// Version byte for ed25519 public keys (`G...`).
pub const VERSION_ACCOUNT_ID: u8 = 6 << 3;

/// Version byte for ed25519 secret seeds (`S...`).
pub const VERSION_SECRET_SEED: u8 = 18 << 3;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// version + 32-byte payload + 2-byte checksum.
const RAW_LEN: usize = 35;

/// Encoded length of a 32-byte key.
pub const ENCODED_LEN: usize = 56;

/// Encode a public key as a `G...` account id.
pub fn encode_account_id(public_key: &[u8; 32]) -> String {
    encode(VERSION_ACCOUNT_ID, public_key)
}

/// Encode a secret seed as an `S...` string (zeroized on drop).
pub fn encode_secret_seed(seed: &[u8; 32]) -> Zeroizing<String> {
    Zeroizing::new(encode(VERSION_SECRET_SEED, seed))
}

/// Decode a `G...` account id into the raw public key.
///
/// # Errors
///
/// Returns [`Error::InvalidStrKey`] on bad length, version byte or checksum.
pub fn decode_account_id(encoded: &str) -> Result<[u8; 32], Error> {
    decode(VERSION_ACCOUNT_ID, encoded).map(|key| *key)
}

/// Decode an `S...` secret seed into raw bytes (zeroized on drop).
///
/// # Errors
///
/// Returns [`Error::InvalidStrKey`] on bad length, version byte or checksum.
pub fn decode_secret_seed(encoded: &str) -> Result<Zeroizing<[u8; 32]>, Error> {
    decode(VERSION_SECRET_SEED, encoded)
}

fn encode(version: u8, payload: &[u8; 32]) -> String {
    let mut raw = Zeroizing::new([0u8; RAW_LEN]);
    raw[0] = version;
    raw[1..33].copy_from_slice(payload);
    let checksum = CRC16.checksum(&raw[..33]);
    raw[33..].copy_from_slice(&checksum.to_le_bytes());
    BASE32_NOPAD.encode(raw.as_slice())
}

fn decode(version: u8, encoded: &str) -> Result<Zeroizing<[u8; 32]>, Error> {
    if encoded.len() != ENCODED_LEN {
        return Err(Error::InvalidStrKey);
    }

    let raw = Zeroizing::new(
        BASE32_NOPAD
            .decode(encoded.as_bytes())
            .map_err(|_| Error::InvalidStrKey)?,
    );
    if raw.len() != RAW_LEN || raw[0] != version {
        return Err(Error::InvalidStrKey);
    }

    let expected = CRC16.checksum(&raw[..33]).to_le_bytes();
    if raw[33..] != expected {
        return Err(Error::InvalidStrKey);
    }

    let mut payload = Zeroizing::new([0u8; 32]);
    payload.copy_from_slice(&raw[1..33]);
    Ok(payload)
}
