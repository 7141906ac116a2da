//! Stellar account CLI commands.

use astra::{Language, Wallet};
use astra_xlm::{DerivedAccount, Deriver, Keypair};
use clap::{Args, Subcommand};
use colored::Colorize;

use super::CliLanguage;

/// Stellar account operations.
#[derive(Args)]
pub struct StellarCommand {
    #[command(subcommand)]
    command: StellarSubcommand,
}

#[derive(Subcommand)]
enum StellarSubcommand {
    /// Generate a new wallet (with mnemonic).
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "24")]
        words: usize,

        /// Mnemonic word-list language.
        #[arg(short, long, env = "ASTRA_LANGUAGE", default_value = "english")]
        language: CliLanguage,

        /// BIP39 passphrase (optional extra security).
        #[arg(short, long, env = "ASTRA_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Number of accounts to derive.
        #[arg(short, long, default_value = "1")]
        count: u32,
    },

    /// Generate a random single-key account (no mnemonic).
    Random,

    /// Recover accounts from a mnemonic phrase.
    Import {
        /// BIP39 mnemonic phrase (words may be abbreviated to 4 letters).
        #[arg(short, long)]
        mnemonic: String,

        /// Mnemonic word-list language.
        #[arg(short, long, env = "ASTRA_LANGUAGE", default_value = "english")]
        language: CliLanguage,

        /// BIP39 passphrase (if used when creating).
        #[arg(short, long, env = "ASTRA_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// First account index.
        #[arg(short, long, default_value = "0")]
        start: u32,

        /// Number of accounts to derive.
        #[arg(short, long, default_value = "1")]
        count: u32,
    },

    /// Show the account for a secret key.
    ImportKey {
        /// Secret seed (`S...`) or 32-byte hex private key.
        #[arg(short, long)]
        key: String,
    },
}

impl StellarCommand {
    /// Execute the Stellar command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            StellarSubcommand::New {
                words,
                language,
                passphrase,
                count,
            } => {
                let wallet = Wallet::generate_in(language.into(), words, passphrase.as_deref())?;
                print_wallet(&wallet, 0, count)?;
            }
            StellarSubcommand::Random => {
                let keypair = Keypair::generate();
                print_keypair(&keypair);
            }
            StellarSubcommand::Import {
                mnemonic,
                language,
                passphrase,
                start,
                count,
            } => {
                let language: Language = language.into();
                let mnemonic = astra::mnemonic::expand_in(language, &mnemonic)?;
                let wallet =
                    Wallet::from_mnemonic_in(language, &mnemonic, passphrase.as_deref())?;
                print_wallet(&wallet, start, count)?;
            }
            StellarSubcommand::ImportKey { key } => {
                let key = key.trim();
                let keypair = if key.starts_with('S') {
                    Keypair::from_secret_seed(key)?
                } else {
                    Keypair::from_hex(key)?
                };
                print_keypair(&keypair);
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_wallet(wallet: &Wallet, start: u32, count: u32) -> Result<(), Box<dyn std::error::Error>> {
    let deriver = Deriver::new(wallet);
    let accounts = deriver.derive_many(start, count)?;
    tracing::debug!(start, count, "derived accounts for display");

    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), wallet.mnemonic());
    println!("      {}     {}", "Language".cyan().bold(), wallet.language().to_string().dimmed());
    if wallet.has_passphrase() {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    println!();

    for (i, account) in accounts.iter().enumerate() {
        print_account(account, accounts.len() > 1);
        if i < accounts.len() - 1 {
            println!();
        }
    }
    println!();

    Ok(())
}

#[rustfmt::skip]
fn print_account(account: &DerivedAccount, show_index: bool) {
    if show_index {
        println!("      {}      {}", "Account".cyan().bold(), format!("[{}]", account.index).dimmed());
    }
    println!("      {}         {}", "Path".cyan().bold(), account.path);
    println!("      {}      {}", "Address".cyan().bold(), account.account_id.green());
    println!("      {}  {}", "Secret Seed".cyan().bold(), account.secret_seed.as_str());
}

#[rustfmt::skip]
fn print_keypair(keypair: &Keypair) {
    println!();
    println!("      {}      {}", "Address".cyan().bold(), keypair.account_id().green());
    println!("      {}  {}", "Secret Seed".cyan().bold(), keypair.secret_seed().as_str());
    println!("      {}   {}", "Public Key".cyan().bold(), keypair.public_key_hex().dimmed());
    println!();
}
