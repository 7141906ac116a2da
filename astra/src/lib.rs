//! # Astra - Stellar Mnemonic Core
//!
//! Turns BIP-39 mnemonics into the 64-byte seeds that Stellar (SEP-0005)
//! account derivation starts from, and generates new mnemonics from secure
//! entropy.
//!
//! ## Features
//!
//! - `rand` (default): Enable OS entropy ([`OsEntropy`]) and random wallet generation
//!
//! Word lists and checksums are provided by the [`bip39`] crate behind the
//! [`WordList`] trait; randomness comes through [`EntropySource`]. Both can be
//! replaced, which keeps generation deterministic under test.
//!
//! # Example
//!
//! ```
//! use astra::{Language, Wallet};
//!
//! let wallet = Wallet::from_mnemonic_in(
//!     Language::English,
//!     "illness spike retreat truth genius clock brain pass fit cave bargain toe",
//!     None,
//! )?;
//!
//! let seed = wallet.seed();
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok::<(), astra::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use
)]
#![forbid(unsafe_code)]

pub mod collab;
pub mod error;
pub mod generator;
pub mod language;
pub mod mnemonic;
pub mod seed;
mod wallet;

#[cfg(feature = "rand")]
pub use collab::OsEntropy;
pub use collab::{Bip39WordList, EntropySource, WordList};
pub use error::{Error, Result};
pub use generator::MnemonicGenerator;
pub use language::Language;
pub use seed::{Seed, stretch};
pub use wallet::Wallet;
