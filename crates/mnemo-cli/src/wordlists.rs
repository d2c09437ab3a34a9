//! Wordlist loading: language codes, built-in lists and wordlist files.
//!
//! Resolution order: an explicit `--wordlist` file, then
//! `<wordlist_dir>/<language file>` when a directory is configured, then the
//! built-in BIP-39 list for the language.

use anyhow::{Context, Result};
use mnemo_core::{Language, MnemonicError, Wordlist};
use std::fmt;
use std::path::Path;

/// Languages selectable with `-l`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCode {
    English,
    Spanish,
    French,
    Italian,
    Korean,
    Japanese,
    TraditionalChinese,
    SimplifiedChinese,
    Czech,
    Portuguese,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 10] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::Italian,
        Self::Korean,
        Self::Japanese,
        Self::TraditionalChinese,
        Self::SimplifiedChinese,
        Self::Czech,
        Self::Portuguese,
    ];

    /// Parse a short code (`eng`, `spa`, …). Case-insensitive.
    pub fn from_code(code: &str) -> Result<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown language code '{}' (expected one of: {})",
                    code,
                    Self::ALL.map(|l| l.code()).join(", ")
                )
            })
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::Spanish => "spa",
            Self::French => "fra",
            Self::Italian => "ita",
            Self::Korean => "kor",
            Self::Japanese => "jpn",
            Self::TraditionalChinese => "tc",
            Self::SimplifiedChinese => "sc",
            Self::Czech => "cze",
            Self::Portuguese => "por",
        }
    }

    /// Standard BIP-39 wordlist file name
    pub fn file_name(self) -> &'static str {
        match self {
            Self::English => "english.txt",
            Self::Spanish => "spanish.txt",
            Self::French => "french.txt",
            Self::Italian => "italian.txt",
            Self::Korean => "korean.txt",
            Self::Japanese => "japanese.txt",
            Self::TraditionalChinese => "chinese-traditional.txt",
            Self::SimplifiedChinese => "chinese-simplified.txt",
            Self::Czech => "czech.txt",
            Self::Portuguese => "portuguese.txt",
        }
    }

    pub fn bip39(self) -> Language {
        match self {
            Self::English => Language::English,
            Self::Spanish => Language::Spanish,
            Self::French => Language::French,
            Self::Italian => Language::Italian,
            Self::Korean => Language::Korean,
            Self::Japanese => Language::Japanese,
            Self::TraditionalChinese => Language::TraditionalChinese,
            Self::SimplifiedChinese => Language::SimplifiedChinese,
            Self::Czech => Language::Czech,
            Self::Portuguese => Language::Portuguese,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parse wordlist text: one word per line, blank lines skipped, CRLF tolerated.
pub fn parse_wordlist(text: &str) -> Result<Wordlist, MnemonicError> {
    Wordlist::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Read and parse a wordlist file
pub fn load_wordlist_file(path: &Path) -> Result<Wordlist> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wordlist file: {}", path.display()))?;
    let wordlist = parse_wordlist(&contents)
        .with_context(|| format!("Invalid wordlist file: {}", path.display()))?;
    log::debug!("Loaded {} words from {}", wordlist.len(), path.display());
    Ok(wordlist)
}

/// Pick the wordlist for an invocation
pub fn resolve_wordlist(
    language: LanguageCode,
    directory: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<Wordlist> {
    if let Some(path) = explicit {
        return load_wordlist_file(path);
    }

    if let Some(dir) = directory {
        return load_wordlist_file(&dir.join(language.file_name()));
    }

    log::debug!("Using built-in {} wordlist", language);
    Ok(Wordlist::from_language(language.bip39()))
}
