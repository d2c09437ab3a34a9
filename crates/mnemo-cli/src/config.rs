//! CLI configuration from an optional TOML file plus environment overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use crate::wordlists::LanguageCode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralSection,

    /// Wordlist selection
    #[serde(default)]
    pub wordlist: WordlistSection,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Log filter (error, warn, info, debug, trace, or env_logger directives)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare mnemonic or seed hex, one line
    #[default]
    Text,
    /// JSON object
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// Wordlist selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistSection {
    /// Default language code (eng, spa, fra, ita, kor, jpn, tc, sc, cze, por)
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory holding `english.txt`, `spanish.txt`, … (built-in lists if unset)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for WordlistSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_language() -> String {
    "eng".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `MNEMO_LOG_LEVEL`
    /// - `MNEMO_OUTPUT`
    /// - `MNEMO_LANGUAGE`
    /// - `MNEMO_WORDLIST_DIR`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = std::env::var("MNEMO_LOG_LEVEL") {
            self.general.log_level = v;
        }
        if let Ok(v) = std::env::var("MNEMO_OUTPUT") {
            self.general.output = v.parse().context("Invalid MNEMO_OUTPUT")?;
        }
        if let Ok(v) = std::env::var("MNEMO_LANGUAGE") {
            self.wordlist.language = v;
        }
        if let Ok(v) = std::env::var("MNEMO_WORDLIST_DIR") {
            self.wordlist.directory = Some(PathBuf::from(v));
        }
        Ok(())
    }

    /// Resolved default language
    pub fn language(&self) -> Result<LanguageCode> {
        LanguageCode::from_code(&self.wordlist.language)
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.general.log_level.trim().is_empty(),
            "general.log_level must not be empty"
        );

        self.language().context("wordlist.language is invalid")?;

        if let Some(ref dir) = self.wordlist.directory {
            anyhow::ensure!(
                dir.is_dir(),
                "wordlist.directory does not exist: {}",
                dir.display()
            );
        }

        Ok(())
    }
}
