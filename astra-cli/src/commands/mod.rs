//! CLI command definitions and handlers.

mod language;
mod mnemonic;
mod stellar;

use clap::{Parser, Subcommand};
pub use language::CliLanguage;
pub use mnemonic::MnemonicCommand;
pub use stellar::StellarCommand;

/// Astra - Stellar accounts from BIP-39 mnemonics.
#[derive(Parser)]
#[command(name = "astra")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logs to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Stellar account operations.
    #[command(name = "xlm", alias = "stellar")]
    Stellar(StellarCommand),

    /// Mnemonic utilities.
    #[command(name = "mnemonic")]
    Mnemonic(MnemonicCommand),
}
