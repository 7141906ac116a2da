//! Mnemonic utility CLI commands.

use astra::{Language, MnemonicGenerator};
use clap::{Args, Subcommand};
use colored::Colorize;

use super::CliLanguage;

/// Mnemonic utility operations.
#[derive(Args)]
pub struct MnemonicCommand {
    #[command(subcommand)]
    command: MnemonicSubcommand,
}

#[derive(Subcommand)]
enum MnemonicSubcommand {
    /// Generate a new mnemonic phrase without deriving accounts.
    Generate {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "24")]
        words: usize,

        /// Mnemonic word-list language.
        #[arg(short, long, env = "ASTRA_LANGUAGE", default_value = "english")]
        language: CliLanguage,
    },

    /// Check a mnemonic against the word list and its checksum.
    Check {
        /// BIP39 mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// Mnemonic word-list language.
        #[arg(short, long, env = "ASTRA_LANGUAGE", default_value = "english")]
        language: CliLanguage,
    },

    /// Expand 4-letter abbreviations to full words.
    Expand {
        /// Abbreviated mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// Mnemonic word-list language.
        #[arg(short, long, env = "ASTRA_LANGUAGE", default_value = "english")]
        language: CliLanguage,
    },
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            MnemonicSubcommand::Generate { words, language } => {
                let language: Language = language.into();
                let phrase = MnemonicGenerator::new(language).with_word_count(words)?;
                print_phrase(language, &phrase);
            }
            MnemonicSubcommand::Check { mnemonic, language } => {
                let language: Language = language.into();
                print_check(language, astra::mnemonic::check(&mnemonic, language));
            }
            MnemonicSubcommand::Expand { mnemonic, language } => {
                let language: Language = language.into();
                let expanded = astra::mnemonic::expand_in(language, &mnemonic)?;
                print_phrase(language, &expanded);
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_phrase(language: Language, phrase: &str) {
    let words = phrase.split_whitespace().count();

    println!();
    println!("      {}     {}", "Language".cyan().bold(), language.to_string().dimmed());
    println!("      {}        {words} words", "Words".cyan().bold());
    println!("      {}     {}", "Mnemonic".cyan().bold(), phrase.green());
    println!();
}

#[rustfmt::skip]
fn print_check(language: Language, valid: bool) {
    let verdict = if valid { "valid".green() } else { "invalid".red() };

    println!();
    println!("      {}     {}", "Language".cyan().bold(), language.to_string().dimmed());
    println!("      {}       {}", "Status".cyan().bold(), verdict);
    println!();
}
