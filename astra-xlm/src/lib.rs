//! Stellar account derivation for Astra.
//!
//! Derives Stellar (SEP-0005) accounts from a unified [`astra::Wallet`]
//! along the hardened SLIP-0010 path `m/44'/148'/index'`, and encodes keys as
//! StrKeys (`G...` account ids, `S...` secret seeds).
//!
//! # Features
//!
//! - `rand` (default): Enable random keypair generation for [`Keypair`]
//!
//! # Usage
//!
//! ```
//! use astra::Wallet;
//! use astra_xlm::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "illness spike retreat truth genius clock brain pass fit cave bargain toe",
//!     None,
//! )?;
//!
//! let deriver = Deriver::new(&wallet);
//! let account = deriver.derive(0)?;
//! assert_eq!(
//!     account.account_id,
//!     "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6"
//! );
//! # Ok::<(), astra_xlm::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod keypair;
pub mod slip10;
pub mod strkey;

pub use deriver::{DerivedAccount, Deriver};
pub use error::Error;
pub use keypair::Keypair;
pub use slip10::derive;

/// A convenient Result type alias for astra-xlm operations.
pub type Result<T> = core::result::Result<T, Error>;
