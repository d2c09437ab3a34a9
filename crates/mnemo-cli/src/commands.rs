//! Command execution: turns a parsed invocation into printable output.

use crate::args::{Invocation, Mode};
use crate::config::{CliConfig, OutputFormat};
use crate::wordlists::{resolve_wordlist, LanguageCode};
use anyhow::{Context, Result};
use mnemo_core::{derive_seed, encode_entropy, generate_mnemonic, Entropy, MnemonicSentence, Seed};
use serde::Serialize;
use zeroize::Zeroizing;

#[derive(Serialize)]
struct MnemonicReport<'a> {
    language: &'a str,
    word_count: usize,
    mnemonic: &'a str,
}

#[derive(Serialize)]
struct SeedReport<'a> {
    seed: &'a str,
}

/// Run an invocation and return the text to print (newline not included).
pub fn execute(invocation: &Invocation, config: &CliConfig) -> Result<Zeroizing<String>> {
    let format = if invocation.json {
        OutputFormat::Json
    } else {
        config.general.output
    };

    match &invocation.mode {
        Mode::Generate { bits } => {
            let language = language_for(invocation, config)?;
            let wordlist = resolve_wordlist(
                language,
                config.wordlist.directory.as_deref(),
                invocation.wordlist.as_deref(),
            )?;

            let mnemonic = generate_mnemonic(*bits, &wordlist)
                .with_context(|| format!("Failed to generate a {}-bit mnemonic", bits))?;
            log::info!("Generated {}-word mnemonic ({})", mnemonic.word_count(), language);

            render_mnemonic(&mnemonic, language, format)
        }
        Mode::Encode { entropy_hex } => {
            let language = language_for(invocation, config)?;
            let wordlist = resolve_wordlist(
                language,
                config.wordlist.directory.as_deref(),
                invocation.wordlist.as_deref(),
            )?;

            let entropy = Entropy::from_hex(entropy_hex).context("Invalid entropy")?;
            let mnemonic = encode_entropy(&entropy, &wordlist)?;
            log::info!("Encoded {} as {} words", entropy.size(), mnemonic.word_count());

            render_mnemonic(&mnemonic, language, format)
        }
        Mode::Seed {
            mnemonic,
            passphrase,
        } => {
            let seed = derive_seed(mnemonic, passphrase);
            log::info!(
                "Derived seed (passphrase: {})",
                if passphrase.is_empty() { "none" } else { "set" }
            );
            render_seed(&seed, format)
        }
    }
}

fn language_for(invocation: &Invocation, config: &CliConfig) -> Result<LanguageCode> {
    match invocation.language {
        Some(ref code) => LanguageCode::from_code(code),
        None => config.language(),
    }
}

fn render_mnemonic(
    mnemonic: &MnemonicSentence,
    language: LanguageCode,
    format: OutputFormat,
) -> Result<Zeroizing<String>> {
    let phrase = Zeroizing::new(mnemonic.phrase());
    match format {
        OutputFormat::Text => Ok(phrase),
        OutputFormat::Json => {
            let report = MnemonicReport {
                language: language.code(),
                word_count: mnemonic.word_count(),
                mnemonic: &phrase,
            };
            Ok(Zeroizing::new(serde_json::to_string_pretty(&report)?))
        }
    }
}

fn render_seed(seed: &Seed, format: OutputFormat) -> Result<Zeroizing<String>> {
    let hex = Zeroizing::new(seed.to_hex());
    match format {
        OutputFormat::Text => Ok(hex),
        OutputFormat::Json => {
            let report = SeedReport { seed: &hex };
            Ok(Zeroizing::new(serde_json::to_string_pretty(&report)?))
        }
    }
}
