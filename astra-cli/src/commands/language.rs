//! Word-list language argument.

use astra::Language;
use clap::ValueEnum;

/// CLI-compatible language enum.
///
/// Maps to `astra::Language` variants.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CliLanguage {
    /// English word list
    #[default]
    English,
    /// Japanese word list
    Japanese,
    /// French word list
    French,
    /// Spanish word list
    Spanish,
    /// Italian word list
    Italian,
    /// Korean word list
    Korean,
    /// Simplified Chinese word list
    #[value(name = "chinese_simplified", alias = "chinese-simplified")]
    ChineseSimplified,
    /// Traditional Chinese word list
    #[value(name = "chinese_traditional", alias = "chinese-traditional")]
    ChineseTraditional,
}

impl From<CliLanguage> for Language {
    fn from(language: CliLanguage) -> Self {
        match language {
            CliLanguage::English => Language::English,
            CliLanguage::Japanese => Language::Japanese,
            CliLanguage::French => Language::French,
            CliLanguage::Spanish => Language::Spanish,
            CliLanguage::Italian => Language::Italian,
            CliLanguage::Korean => Language::Korean,
            CliLanguage::ChineseSimplified => Language::ChineseSimplified,
            CliLanguage::ChineseTraditional => Language::ChineseTraditional,
        }
    }
}
