//! Command-line parsing (hand-rolled, no clap)

use anyhow::{bail, Result};
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// What the invocation asks for
#[derive(PartialEq, Eq)]
pub enum Mode {
    /// `-e <bits>`: fresh entropy → mnemonic
    Generate { bits: usize },
    /// `-x <hex>`: supplied entropy → mnemonic
    Encode { entropy_hex: Zeroizing<String> },
    /// `-k <mnemonic> [-p <passphrase>]`: mnemonic → seed
    Seed {
        mnemonic: Zeroizing<String>,
        passphrase: Zeroizing<String>,
    },
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate { bits } => write!(f, "Generate {{ bits: {} }}", bits),
            Self::Encode { .. } => f.write_str("Encode { .. }"),
            Self::Seed { .. } => f.write_str("Seed { .. }"),
        }
    }
}

/// A parsed invocation
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub language: Option<String>,
    pub wordlist: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Top-level action
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Run(Invocation),
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Action>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let mut bits: Option<String> = None;
    let mut entropy_hex: Option<Zeroizing<String>> = None;
    let mut mnemonic: Option<Zeroizing<String>> = None;
    let mut passphrase: Option<Zeroizing<String>> = None;
    let mut language = None;
    let mut wordlist = None;
    let mut config = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        let mut value = |name: &str| -> Result<String> {
            match args.next() {
                Some(v) => Ok(v),
                None => bail!("Option {} requires an argument", name),
            }
        };

        match arg.as_str() {
            "-e" | "--entropy" => bits = Some(value(&arg)?),
            "-x" | "--entropy-hex" => entropy_hex = Some(Zeroizing::new(value(&arg)?)),
            "-k" | "--key" => mnemonic = Some(Zeroizing::new(value(&arg)?)),
            "-p" | "--passphrase" => passphrase = Some(Zeroizing::new(value(&arg)?)),
            "-l" | "--language" => language = Some(value(&arg)?),
            "-w" | "--wordlist" => wordlist = Some(PathBuf::from(value(&arg)?)),
            "-c" | "--config" => config = Some(PathBuf::from(value(&arg)?)),
            "--json" => json = true,
            "-h" | "--help" => return Ok(Action::Help),
            "-V" | "--version" => return Ok(Action::Version),
            other => bail!("Unknown option: {}", other),
        }
    }

    let requested = [bits.is_some(), entropy_hex.is_some(), mnemonic.is_some()]
        .iter()
        .filter(|&&set| set)
        .count();
    if requested > 1 {
        bail!("Options -e, -x and -k are mutually exclusive");
    }

    let mode = if let Some(bits) = bits {
        let bits = bits
            .trim()
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("Invalid entropy size: {}", bits))?;
        Mode::Generate { bits }
    } else if let Some(entropy_hex) = entropy_hex {
        Mode::Encode { entropy_hex }
    } else if let Some(mnemonic) = mnemonic {
        Mode::Seed {
            mnemonic,
            passphrase: passphrase.take().unwrap_or_default(),
        }
    } else {
        bail!("One of -e (entropy), -x (entropy hex) or -k (mnemonic) is required");
    };

    if passphrase.is_some() {
        bail!("Option -p only applies together with -k");
    }

    Ok(Action::Run(Invocation {
        mode,
        language,
        wordlist,
        config,
        json,
    }))
}

pub fn print_help() {
    println!(
        r#"mnemo - BIP-39 mnemonic and seed generator

USAGE:
    mnemo -e <BITS> [-l <LANG>] [-w <FILE>]
    mnemo -x <HEX> [-l <LANG>] [-w <FILE>]
    mnemo -k "<MNEMONIC>" [-p <PASSPHRASE>]

OPTIONS:
    -e, --entropy <BITS>         Generate a mnemonic from fresh entropy
                                 (128, 160, 192, 224 or 256)
    -x, --entropy-hex <HEX>      Encode the given entropy as a mnemonic
    -l, --language <LANG>        Wordlist language: eng, spa, fra, ita, kor,
                                 jpn, tc, sc, cze, por (default: eng)
    -w, --wordlist <FILE>        Wordlist file, one word per line (2048 words)
    -k, --key <MNEMONIC>         Derive the 64-byte seed from a mnemonic
    -p, --passphrase <TEXT>      Optional passphrase for -k (default: empty)
    -c, --config <PATH>          Config file (TOML)
    --json                       Print JSON instead of plain text
    -h, --help                   Show this help message
    -V, --version                Show version

ENVIRONMENT VARIABLES (override config file):
    MNEMO_CONFIG          Config file path
    MNEMO_LOG_LEVEL       Log level (error/warn/info/debug/trace)
    MNEMO_OUTPUT          Output format (text/json)
    MNEMO_LANGUAGE        Default wordlist language
    MNEMO_WORDLIST_DIR    Directory with english.txt, spanish.txt, ...

EXAMPLES:
    # 24-word English mnemonic
    mnemo -e 256

    # Seed for a mnemonic with a passphrase
    mnemo -k "abandon abandon ... about" -p TREZOR
"#
    );
}
